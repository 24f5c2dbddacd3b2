//! Progress reporting for an assessment session

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use iqtest_application::SessionProgressNotifier;
use iqtest_domain::{CognitiveDomain, DomainScoreAccumulator, ExhaustionReason};
use std::sync::Mutex;

/// Reports progress with one indicatif bar per domain.
///
/// Bars track the estimated overall progress percentage. Share [`multi`]
/// with the console respondent so items are not drawn over.
///
/// [`multi`]: ProgressReporter::multi
pub struct ProgressReporter {
    multi: MultiProgress,
    domain_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            domain_bar: Mutex::new(None),
        }
    }

    pub fn multi(&self) -> MultiProgress {
        self.multi.clone()
    }

    fn domain_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn domain_label(domain: CognitiveDomain, index: usize, total: usize) -> String {
        format!("[{}/{}] {}", index + 1, total, domain)
    }

    fn completion_summary(reason: &ExhaustionReason, accumulator: &DomainScoreAccumulator) -> String {
        format!(
            "{}/{} correct ({}), {}",
            accumulator.correct_count,
            accumulator.total_count,
            accumulator.histogram_label(),
            reason
        )
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProgressNotifier for ProgressReporter {
    fn on_domain_start(&self, domain: CognitiveDomain, index: usize, total: usize) {
        let pb = self.multi.add(ProgressBar::new(100));
        pb.set_style(Self::domain_style());
        pb.set_prefix(Self::domain_label(domain, index, total));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.domain_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_answer(&self, _domain: CognitiveDomain, correct: bool, progress_percent: u8) {
        if let Ok(slot) = self.domain_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let mark = if correct { "v".green() } else { "x".red() };
            pb.set_message(format!("last answer {}", mark));
            pb.set_position(u64::from(progress_percent));
        }
    }

    fn on_domain_complete(
        &self,
        _domain: CognitiveDomain,
        reason: &ExhaustionReason,
        accumulator: &DomainScoreAccumulator,
    ) {
        if let Ok(mut slot) = self.domain_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!(
                "{} {}",
                "done".green(),
                Self::completion_summary(reason, accumulator)
            ));
        }
    }

    fn on_assessment_complete(&self, total_responses: usize) {
        let _ = self.multi.println(format!(
            "{} {} responses recorded",
            "Assessment complete:".green().bold(),
            total_responses
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SessionProgressNotifier for SimpleProgress {
    fn on_domain_start(&self, domain: CognitiveDomain, index: usize, total: usize) {
        println!();
        println!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::domain_label(domain, index, total).bold()
        );
        println!("   {}", domain.description().dimmed());
    }

    fn on_answer(&self, _domain: CognitiveDomain, correct: bool, progress_percent: u8) {
        if correct {
            println!("  {} ({}% done)", "v".green(), progress_percent);
        } else {
            println!("  {} ({}% done)", "x".red(), progress_percent);
        }
    }

    fn on_domain_complete(
        &self,
        domain: CognitiveDomain,
        reason: &ExhaustionReason,
        accumulator: &DomainScoreAccumulator,
    ) {
        println!(
            "  {} {}: {}",
            "done".green(),
            domain,
            ProgressReporter::completion_summary(reason, accumulator)
        );
    }

    fn on_assessment_complete(&self, total_responses: usize) {
        println!();
        println!(
            "{} {} responses recorded",
            "Assessment complete:".green().bold(),
            total_responses
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqtest_domain::{Difficulty, Response, StopReason};

    #[test]
    fn test_domain_label_is_one_based() {
        assert_eq!(
            ProgressReporter::domain_label(CognitiveDomain::WorkingMemory, 2, 5),
            "[3/5] Working Memory"
        );
    }

    #[test]
    fn test_completion_summary() {
        let acc = [true, true, false]
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Response::new(
                    CognitiveDomain::FluidReasoning,
                    format!("fr{}", i),
                    *c,
                    1000,
                    Difficulty::Medium,
                    0,
                )
            })
            .fold(DomainScoreAccumulator::default(), |acc, r| acc.record(&r));
        let summary = ProgressReporter::completion_summary(
            &ExhaustionReason::Stopped(StopReason::CeilingReached),
            &acc,
        );
        assert_eq!(summary, "2/3 correct (E:0 M:3 H:0), ceiling reached");
    }

    #[test]
    fn test_reporter_tracks_domain_bar() {
        let reporter = ProgressReporter::new();
        reporter.on_domain_start(CognitiveDomain::VerbalComprehension, 0, 5);
        reporter.on_answer(CognitiveDomain::VerbalComprehension, true, 3);
        assert!(reporter.domain_bar.lock().unwrap().is_some());
        reporter.on_domain_complete(
            CognitiveDomain::VerbalComprehension,
            &ExhaustionReason::TierDepleted,
            &DomainScoreAccumulator::default(),
        );
        assert!(reporter.domain_bar.lock().unwrap().is_none());
    }
}
