//! Plain-text report export
//!
//! Pure formatting over an [`AssessmentReport`]; the date label is passed in
//! so the output is deterministic.

use super::assembler::AssessmentReport;
use crate::assessment::CognitiveDomain;
use crate::scoring::ClassificationPolicy;
use std::fmt::{self, Write};

pub const DISCLAIMER: &str = "This assessment provides educational insights only. \
For clinical or diagnostic purposes, consult a qualified professional.";

/// Render the line-oriented summary.
pub fn render_text(report: &AssessmentReport, assessment_date: &str) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    if write_report(&mut out, report, assessment_date).is_err() {
        out.clear();
    }
    out
}

fn write_report(out: &mut impl Write, report: &AssessmentReport, assessment_date: &str) -> fmt::Result {
    let score = &report.score;

    writeln!(out, "ADAPTIVE IQ ASSESSMENT REPORT")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;
    writeln!(out, "Assessment Date: {}", assessment_date)?;
    writeln!(out, "Test Duration: {}", report.duration_label())?;
    writeln!(out, "Age at Testing: {} years", report.user_age)?;
    writeln!(out, "Total Questions: {}", report.total_questions)?;
    writeln!(out)?;

    writeln!(out, "SUMMARY OF RESULTS")?;
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(out, "Full Scale IQ (FSIQ): {}", score.fsiq)?;
    writeln!(out, "Percentile Rank: {}", score.whole_percentile())?;
    writeln!(
        out,
        "Classification: {}",
        ClassificationPolicy::Simplified.classify(score.fsiq as f64)
    )?;
    writeln!(out, "Confidence Interval: {}", score.confidence_interval)?;
    writeln!(out)?;

    writeln!(out, "ADAPTIVE TESTING METRICS")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for domain in CognitiveDomain::ALL {
        let Some(perf) = report.performance(domain) else {
            continue;
        };
        let acc = &perf.accumulator;
        writeln!(out)?;
        writeln!(out, "{}:", domain)?;
        writeln!(out, "  Final Difficulty: {}", perf.final_difficulty)?;
        writeln!(
            out,
            "  Questions: {} ({})",
            acc.total_count,
            acc.histogram_label()
        )?;
        match perf.accuracy_percent() {
            Some(pct) => writeln!(out, "  Accuracy: {}%", pct)?,
            None => writeln!(out, "  Accuracy: N/A")?,
        }
        match &perf.score {
            Some(s) if !s.insufficient_data => writeln!(out, "  Domain Score: {}", s.index_score)?,
            _ => writeln!(out, "  Domain Score: N/A")?,
        }
    }

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "DISCLAIMER")?;
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(out, "{}", DISCLAIMER)
}

/// Suggested file name for a saved export
pub fn export_file_name(date_iso: &str) -> String {
    format!("Adaptive_IQ_Report_{}.txt", date_iso)
}
