//! CLI entrypoint for adaptive-iq
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use iqtest_application::{
    AssessmentEventLogger, AssessmentOutcome, AssessmentParams, NoEventLogger, NoProgress,
    RunAssessmentUseCase, ScoreSessionUseCase, SessionProgressNotifier, SessionStart,
    SessionStore,
};
use iqtest_domain::config::{ConfigKeyInfo, has_errors, known_keys, lookup_key};
use iqtest_domain::report::{export_file_name, render_text};
use iqtest_domain::{AssessmentReport, ConfigIssueCode, OutputFormat, ResultSubmission};
use iqtest_infrastructure::{
    ConfigLoader, FileConfig, JsonFileSessionStore, JsonlEventLogger, catalog_source,
};
use iqtest_presentation::{
    Cli, Command, ConsoleFormatter, ConsoleRespondent, ProgressReporter, ReportFormatter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref());
    info!("Starting adaptive-iq");

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let needs_catalog = matches!(cli.command, Command::Take { .. } | Command::Resume);
    let issues: Vec<_> = config
        .validate()
        .into_iter()
        .filter(|issue| needs_catalog || issue.code != ConfigIssueCode::CatalogSourceMissing)
        .collect();
    for issue in &issues {
        eprintln!("{}", issue);
    }
    if has_errors(&issues) {
        bail!("Invalid configuration");
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let mut params = config.assessment.to_params();
    if let Some(strategy) = cli.strategy {
        params = params.with_strategy(strategy.into());
    }
    if cli.seed.is_some() {
        params = params.with_seed(cli.seed);
    }

    match cli.command.clone() {
        Command::Config { key: Some(key) } => {
            let info = lookup_key(&key).ok_or_else(|| anyhow!("Unknown config key: {}", key))?;
            print_key(info);
            Ok(())
        }
        Command::Config { key: None } => {
            ConfigLoader::print_config_sources();
            println!();
            println!("Effective configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
            println!("Known keys:");
            for info in known_keys() {
                print_key(info);
            }
            Ok(())
        }
        Command::Report { file } => {
            let store = JsonFileSessionStore::new(&file);
            let state = store
                .load()
                .await?
                .ok_or_else(|| anyhow!("No saved session at {}", file.display()))?;
            let report = ScoreSessionUseCase::new(params.strategy).execute(&state)?;
            emit_report(&report, format, cli.export.as_deref())
        }
        Command::Take { age } => {
            run_session(&cli, &config, params, SessionStart::Fresh { age }, format).await
        }
        Command::Resume => run_session(&cli, &config, params, SessionStart::Resume, format).await,
    }
}

fn print_key(info: &ConfigKeyInfo) {
    if info.valid_values.is_empty() {
        println!("  {:<24} {}", info.key, info.description);
    } else {
        println!(
            "  {:<24} {} [{}]",
            info.key,
            info.description,
            info.valid_values.join(", ")
        );
    }
}

/// Command-line flags take precedence over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    if let Some(path) = &cli.state_file {
        config.session.state_file = Some(path.clone());
    }
    if let Some(path) = &cli.event_log {
        config.logging.event_log = Some(path.clone());
    }
}

fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "adaptive-iq.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console)
        .with(file_layer)
        .init();

    guard
}

async fn run_session(
    cli: &Cli,
    config: &FileConfig,
    params: AssessmentParams,
    start: SessionStart,
    format: OutputFormat,
) -> Result<()> {
    // === Dependency Injection ===
    let location = config.catalog.location().0.ok_or_else(|| {
        anyhow!("No question catalog configured. Pass --catalog <PATH> or set [catalog] path")
    })?;
    let catalog = catalog_source(&location)?;

    let state_file = config.session.state_file();
    let store = Arc::new(JsonFileSessionStore::new(&state_file));

    let events: Arc<dyn AssessmentEventLogger> = match &config.logging.event_log {
        Some(path) => match JsonlEventLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Event log disabled: could not open {}", path.display());
                Arc::new(NoEventLogger)
            }
        },
        None => Arc::new(NoEventLogger),
    };

    let mut respondent = ConsoleRespondent::new();
    let progress: Arc<dyn SessionProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else {
        let reporter = ProgressReporter::new();
        respondent = respondent.with_progress(reporter.multi());
        Arc::new(reporter)
    };

    let use_case = RunAssessmentUseCase::new(catalog, store, Arc::new(respondent))
        .with_progress(progress)
        .with_event_logger(events)
        .with_params(params);

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|               Adaptive IQ Assessment                       |");
        println!("+============================================================+");
        println!();
        println!("Answer with the option number, s to skip, q to save and quit.");
    }

    match use_case.execute(start).await? {
        AssessmentOutcome::Completed { report, .. } => {
            info!(state_file = %state_file.display(), "Session complete");
            emit_report(&report, format, cli.export.as_deref())
        }
        AssessmentOutcome::Suspended { state } => {
            println!(
                "Saved {} responses to {}",
                state.responses.len(),
                state_file.display()
            );
            Ok(())
        }
    }
}

fn emit_report(report: &AssessmentReport, format: OutputFormat, export: Option<&Path>) -> Result<()> {
    println!("{}", ConsoleFormatter.render(report, format));

    if let Some(dir) = export {
        let paths = export_report(report, dir)?;
        for path in paths {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Write the plain-text report and the result payload into `dir`
fn export_report(report: &AssessmentReport, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let text_path = dir.join(export_file_name(&date));
    std::fs::write(&text_path, render_text(report, &date))
        .with_context(|| format!("Failed to write {}", text_path.display()))?;

    let payload_path = dir.join(format!("Adaptive_IQ_Result_{}.json", date));
    let payload = serde_json::to_string_pretty(&ResultSubmission::from_report(report))?;
    std::fs::write(&payload_path, payload)
        .with_context(|| format!("Failed to write {}", payload_path.display()))?;

    Ok(vec![text_path, payload_path])
}
