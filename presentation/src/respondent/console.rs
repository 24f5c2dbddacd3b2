//! Interactive console respondent.
//!
//! Presents one item at a time on stdout and reads the answer from stdin.
//!
//! ```text
//! ── Question 4 · Working Memory · medium · 11% ──
//!
//! Which number completes the sequence 2, 4, 8, ?
//!
//!   1) 10
//!   2) 12
//!   3) 16
//!
//! answer>
//! ```
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `1`..`n` or `a`..`z` | Choose an option |
//! | any text | Typed answer (text items) |
//! | `s`, `skip` | Skip the item (scored incorrect) |
//! | `q`, `quit` | Save and stop; `resume` continues later |

use async_trait::async_trait;
use colored::Colorize;
use indicatif::MultiProgress;
use iqtest_application::{AnswerSubmission, QuestionContext, RespondentError, RespondentPort};
use iqtest_domain::{Question, SubmittedAnswer};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What a line of input means for the current item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Answer(SubmittedAnswer),
    Quit,
    /// Ask again, optionally with a hint
    Retry(Option<String>),
}

/// Interpret one line of input for `question`.
pub fn parse_input(question: &Question, input: &str) -> InputAction {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "" => return InputAction::Retry(None),
        "q" | "quit" | "/quit" => return InputAction::Quit,
        "s" | "skip" | "/skip" => return InputAction::Answer(SubmittedAnswer::Skipped),
        _ => {}
    }

    let options = question.options();
    if options.is_empty() || question.expects_text() {
        return InputAction::Answer(SubmittedAnswer::Text(input.to_string()));
    }

    match option_index(input, options.len()) {
        Some(index) => InputAction::Answer(SubmittedAnswer::Option(index)),
        None => InputAction::Retry(Some(format!(
            "Enter a number between 1 and {} (or s to skip, q to quit)",
            options.len()
        ))),
    }
}

/// 1-based number or single letter to a 0-based option index
fn option_index(input: &str, count: usize) -> Option<usize> {
    if let Ok(n) = input.parse::<usize>() {
        return (1..=count).contains(&n).then(|| n - 1);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            (index < count).then_some(index)
        }
        _ => None,
    }
}

/// Terminal respondent reading answers line by line.
///
/// When given the [`MultiProgress`] used by the progress reporter, bars are
/// hidden while an item is on screen.
pub struct ConsoleRespondent {
    multi: Option<MultiProgress>,
}

impl ConsoleRespondent {
    pub fn new() -> Self {
        Self { multi: None }
    }

    pub fn with_progress(mut self, multi: MultiProgress) -> Self {
        self.multi = Some(multi);
        self
    }

    fn display_question(&self, question: &Question, context: &QuestionContext) {
        println!();
        println!(
            "{}",
            format!(
                "── Question {} · {} · {} · {}% ──",
                context.question_number,
                context.domain,
                context.difficulty,
                context.progress_percent
            )
            .cyan()
            .bold()
        );
        println!();
        println!(
            "{}",
            question
                .prompt()
                .unwrap_or("(this item has no prompt text)")
                .bold()
        );

        let options = question.options();
        if !options.is_empty() && !question.expects_text() {
            println!();
            for (i, option) in options.iter().enumerate() {
                println!("  {}) {}", (i + 1).to_string().yellow(), option);
            }
        }
        println!();
    }

    /// Read one line; `None` on end of input
    fn read_line(&self) -> Result<Option<String>, RespondentError> {
        print!("{} ", "answer>".magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| RespondentError::IoError(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| RespondentError::IoError(format!("Failed to read input: {}", e)))?;
        Ok((read > 0).then_some(input))
    }

    fn interact(
        &self,
        question: &Question,
        context: &QuestionContext,
    ) -> Result<SubmittedAnswer, RespondentError> {
        self.display_question(question, context);
        loop {
            let Some(line) = self.read_line()? else {
                return Err(RespondentError::Cancelled);
            };
            match parse_input(question, &line) {
                InputAction::Answer(answer) => return Ok(answer),
                InputAction::Quit => {
                    println!("{}", "Session saved. Run `adaptive-iq resume` to continue.".yellow());
                    return Err(RespondentError::Cancelled);
                }
                InputAction::Retry(Some(hint)) => println!("{}", hint.yellow()),
                InputAction::Retry(None) => {}
            }
        }
    }
}

impl Default for ConsoleRespondent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RespondentPort for ConsoleRespondent {
    async fn ask(
        &self,
        question: &Question,
        context: &QuestionContext,
    ) -> Result<AnswerSubmission, RespondentError> {
        let started = Instant::now();
        let answer = match &self.multi {
            Some(multi) => multi.suspend(|| self.interact(question, context)),
            None => self.interact(question, context),
        }?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        Ok(AnswerSubmission::new(answer, elapsed_ms))
    }
}
