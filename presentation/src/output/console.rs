//! Console output formatter for assessment reports

use crate::output::formatter::ReportFormatter;
use colored::{ColoredString, Colorize};
use iqtest_domain::report::DISCLAIMER;
use iqtest_domain::scoring::ProfileEntry;
use iqtest_domain::{AssessmentReport, CognitiveDomain, DomainPerformance};

/// Formats assessment reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &AssessmentReport) -> String {
        let score = &report.score;
        let mut output = String::new();

        output.push_str(&Self::header("Adaptive IQ Assessment Results"));
        output.push('\n');

        // Full scale
        output.push_str(&format!(
            "\n{} {}\n",
            "Full Scale IQ:".cyan().bold(),
            Self::score_colored(score.fsiq)
        ));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Classification:".cyan().bold(),
            score.classification,
            score.classification.description().dimmed()
        ));
        output.push_str(&format!(
            "{} {:.1}\n",
            "Percentile:".cyan().bold(),
            score.percentile
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence:".cyan().bold(),
            score.confidence_interval
        ));
        output.push_str(&format!(
            "{} {:.2} ({})\n",
            "Reliability:".cyan().bold(),
            score.reliability.coefficient,
            score.reliability.interpretation
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Scoring:".cyan().bold(),
            score.strategy
        ));

        // Domains
        output.push_str(&Self::section_header("Cognitive Domains"));
        for domain in CognitiveDomain::ALL {
            if let Some(perf) = report.performance(domain) {
                output.push_str(&Self::domain_block(perf));
            }
        }

        // Profile
        if !score.strengths.is_empty() || !score.weaknesses.is_empty() {
            output.push_str(&Self::section_header("Cognitive Profile"));
            if !score.strengths.is_empty() {
                output.push_str(&format!("\n{}\n", "Relative Strengths:".green().bold()));
                for entry in &score.strengths {
                    output.push_str(&Self::profile_line(entry));
                }
            }
            if !score.weaknesses.is_empty() {
                output.push_str(&format!("\n{}\n", "Relative Weaknesses:".yellow().bold()));
                for entry in &score.weaknesses {
                    output.push_str(&Self::profile_line(entry));
                }
            }
        }

        if !score.recommendations.is_empty() {
            output.push_str(&format!("\n{}\n", "Recommendations:".cyan().bold()));
            for recommendation in &score.recommendations {
                output.push_str(&format!("  * {}\n", recommendation));
            }
        }

        // Session
        output.push_str(&Self::section_header("Session"));
        output.push_str(&format!(
            "\n{} {}\n{} {}\n{} {} years\n",
            "Duration:".dimmed(),
            report.duration_label(),
            "Questions:".dimmed(),
            report.total_questions,
            "Age:".dimmed(),
            report.user_age
        ));

        output.push_str(&format!("\n{}\n", DISCLAIMER.dimmed()));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &AssessmentReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the full-scale result only
    pub fn format_summary(report: &AssessmentReport) -> String {
        let score = &report.score;
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Adaptive IQ Result ===".cyan().bold()
        ));
        output.push_str(&format!(
            "{} {}  ({})\n",
            "FSIQ:".bold(),
            Self::score_colored(score.fsiq),
            score.confidence_interval
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Percentile:".bold(),
            score.whole_percentile()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Classification:".bold(),
            score.classification
        ));

        output
    }

    fn domain_block(perf: &DomainPerformance) -> String {
        let acc = &perf.accumulator;
        let mut block = format!("\n{}\n", format!("── {} ──", perf.domain).yellow().bold());

        match perf.score.as_ref().filter(|s| !s.insufficient_data) {
            Some(s) => {
                block.push_str(&format!(
                    "  Index: {}  Percentile: {:.1}  {}\n",
                    Self::score_colored(s.index_score),
                    s.percentile,
                    s.classification
                ));
                if let (Some(scaled), Some(composite)) = (s.scaled_score, s.composite_score) {
                    block.push_str(&format!(
                        "  Scaled: {}  Composite: {}\n",
                        scaled, composite
                    ));
                }
            }
            None => block.push_str(&format!("  Index: {}\n", "N/A (no responses)".dimmed())),
        }

        let accuracy = perf
            .accuracy_percent()
            .map(|pct| format!("{}%", pct))
            .unwrap_or_else(|| "N/A".to_string());
        block.push_str(&format!(
            "  Accuracy: {}  Questions: {} ({})  Final difficulty: {}\n",
            accuracy,
            acc.total_count,
            acc.histogram_label(),
            perf.final_difficulty
        ));
        block
    }

    fn profile_line(entry: &ProfileEntry) -> String {
        format!(
            "  * {}: {} ({:+.1})\n",
            entry.domain, entry.score, entry.deviation
        )
    }

    fn score_colored(score: i32) -> ColoredString {
        let text = score.to_string();
        match score {
            s if s >= 130 => text.magenta().bold(),
            s if s >= 110 => text.green().bold(),
            s if s >= 90 => text.bold(),
            s if s >= 80 => text.yellow().bold(),
            _ => text.red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, report: &AssessmentReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &AssessmentReport) -> String {
        Self::format_json(report)
    }

    fn format_summary(&self, report: &AssessmentReport) -> String {
        Self::format_summary(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqtest_domain::{
        Difficulty, OutputFormat, ReportAssembler, Response, ScientificScoring, ScoringStrategy,
        SessionState,
    };

    fn sample_report() -> AssessmentReport {
        colored::control::set_override(false);
        let mut state = SessionState::new(18).unwrap();
        for (i, correct) in [true, true, false].iter().enumerate() {
            state = state
                .record(Response::new(
                    CognitiveDomain::VerbalComprehension,
                    format!("vc{}", i),
                    *correct,
                    8000,
                    Difficulty::Medium,
                    i as u64,
                ))
                .unwrap();
        }
        let score = ScientificScoring::default().score(&state.responses, state.user_age);
        ReportAssembler::assemble(&state, score)
    }

    #[test]
    fn test_full_format_lists_every_domain() {
        let report = sample_report();
        let text = ConsoleFormatter::format(&report);
        for domain in CognitiveDomain::ALL {
            assert!(text.contains(domain.as_str()), "missing {}", domain);
        }
        assert!(text.contains("N/A (no responses)"));
        assert!(text.contains("E:0 M:3 H:0"));
        assert!(text.contains(&report.score.fsiq.to_string()));
    }

    #[test]
    fn test_summary_is_short() {
        let report = sample_report();
        let text = ConsoleFormatter::format_summary(&report);
        assert!(text.contains("FSIQ:"));
        assert!(!text.contains("Cognitive Domains"));
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample_report();
        let json = ConsoleFormatter.render(&report, OutputFormat::Json);
        let parsed: AssessmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score.fsiq, report.score.fsiq);
        assert_eq!(parsed.total_questions, 3);
    }
}
