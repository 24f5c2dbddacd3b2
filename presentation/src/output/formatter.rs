//! Output formatter trait

use iqtest_domain::{AssessmentReport, OutputFormat};

/// Trait for formatting assessment reports
pub trait ReportFormatter {
    /// Scores, per-domain detail, profile and adaptive metrics
    fn format(&self, report: &AssessmentReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &AssessmentReport) -> String;

    /// Full-scale score only (concise output)
    fn format_summary(&self, report: &AssessmentReport) -> String;

    fn render(&self, report: &AssessmentReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(report),
            OutputFormat::Summary => self.format_summary(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
