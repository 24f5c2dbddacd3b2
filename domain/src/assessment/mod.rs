//! Assessment data model
//!
//! Entities and value objects shared by the adaptive engine and the
//! scoring pipeline:
//!
//! - [`CognitiveDomain`] and [`Difficulty`]: the two axes of the item bank
//! - [`Question`] / [`QuestionCatalog`]: immutable items, loaded once
//! - [`Response`] / [`ResponseLog`]: append-only answer history
//! - [`DomainScoreAccumulator`]: per-domain tally derived from the log
//! - [`SessionState`]: everything needed to resume a session

pub mod accumulator;
pub mod catalog;
pub mod cognitive_domain;
pub mod difficulty;
pub mod question;
pub mod response;
pub mod session;

pub use accumulator::DomainScoreAccumulator;
pub use catalog::QuestionCatalog;
pub use cognitive_domain::CognitiveDomain;
pub use difficulty::Difficulty;
pub use question::{AnswerKey, Question, SubmittedAnswer};
pub use response::{Response, ResponseLog};
pub use session::{SessionState, ESTIMATED_ITEMS_PER_DOMAIN, MAX_AGE, MIN_AGE};
