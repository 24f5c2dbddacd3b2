//! Session persistence configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Where the in-progress session is saved
    pub state_file: Option<PathBuf>,
}

impl FileSessionConfig {
    /// Configured state file, or `<data dir>/adaptive-iq/session.json`
    pub fn state_file(&self) -> PathBuf {
        self.state_file.clone().unwrap_or_else(default_state_file)
    }
}

fn default_state_file() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("adaptive-iq"))
        .unwrap_or_else(|| PathBuf::from(".adaptive-iq"))
        .join("session.json")
}
