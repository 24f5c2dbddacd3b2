//! Report assembly, text export and result submission payload

pub mod assembler;
pub mod export;
pub mod submission;

pub use assembler::{AssessmentReport, DomainPerformance, ReportAssembler};
pub use export::{DISCLAIMER, export_file_name, render_text};
pub use submission::ResultSubmission;
