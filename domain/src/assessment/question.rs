//! Question entity and its correctness oracle

use super::{CognitiveDomain, Difficulty};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Correct answer for a question.
///
/// Multiple-choice items store the index of the correct option; free-text
/// items (sequences, spans) store a canonical text answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Option(usize),
    Text(String),
}

/// What the respondent submitted for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmittedAnswer {
    /// Index of the chosen option
    Option(usize),
    /// Typed answer
    Text(String),
    /// Interactive items are judged by the front end itself
    Judged(bool),
    /// No answer before the item timed out
    Skipped,
}

impl AnswerKey {
    /// Judge a submitted answer against this key.
    ///
    /// Text answers ignore dashes and whitespace, so `"3-1-4"` and `"3 1 4"`
    /// both match a key of `"314"`.
    pub fn judge(&self, answer: &SubmittedAnswer) -> bool {
        match (self, answer) {
            (_, SubmittedAnswer::Judged(correct)) => *correct,
            (_, SubmittedAnswer::Skipped) => false,
            (AnswerKey::Option(expected), SubmittedAnswer::Option(chosen)) => expected == chosen,
            (AnswerKey::Text(expected), SubmittedAnswer::Text(typed)) => {
                normalize_text_answer(typed) == normalize_text_answer(expected)
            }
            (AnswerKey::Text(expected), SubmittedAnswer::Option(chosen)) => {
                expected.trim() == chosen.to_string()
            }
            (AnswerKey::Option(expected), SubmittedAnswer::Text(typed)) => {
                typed.trim().parse::<usize>().is_ok_and(|idx| idx == *expected)
            }
        }
    }
}

fn normalize_text_answer(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// A catalog item (Entity).
///
/// Immutable once loaded. Presentation fields (`question`, `options`,
/// `type`, `displayTime`, ...) are kept as an opaque JSON map; the core only
/// needs identity, placement and the answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub domain: CognitiveDomain,
    pub difficulty: Difficulty,
    pub answer_key: AnswerKey,
    #[serde(default)]
    pub content: Map<String, Value>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        domain: CognitiveDomain,
        difficulty: Difficulty,
        answer_key: AnswerKey,
    ) -> Self {
        Self {
            id: id.into(),
            domain,
            difficulty,
            answer_key,
            content: Map::new(),
        }
    }

    pub fn with_content(mut self, content: Map<String, Value>) -> Self {
        self.content = content;
        self
    }

    /// Prompt text, if the payload carries one
    pub fn prompt(&self) -> Option<&str> {
        self.content.get("question").and_then(Value::as_str)
    }

    /// Multiple-choice options rendered as strings
    pub fn options(&self) -> Vec<String> {
        self.content
            .get("options")
            .and_then(Value::as_array)
            .map(|opts| {
                opts.iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the item expects a typed answer rather than a choice
    pub fn expects_text(&self) -> bool {
        let declared_text = self
            .content
            .get("inputType")
            .and_then(Value::as_str)
            .is_some_and(|t| t == "text");
        declared_text || matches!(self.answer_key, AnswerKey::Text(_))
    }

    pub fn judge(&self, answer: &SubmittedAnswer) -> bool {
        self.answer_key.judge(answer)
    }
}
