//! Adaptive item-selection engine
//!
//! ```text
//! previous answer ──▶ DifficultyStaircase ──▶ DomainContinuationPolicy
//!                                                   │
//!                                 stop ◀────────────┤
//!                                                   ▼
//!                         catalog bucket (domain, tier) minus answered ids
//!                                                   │
//!                              empty ─▶ DomainExhausted
//!                                                   ▼
//!                                   uniform random pick (injected Rng)
//! ```

pub mod continuation;
pub mod selector;
pub mod staircase;

pub use continuation::{ContinuationDecision, DomainContinuationPolicy, StopReason};
pub use selector::{AdaptiveSelector, ExhaustionReason, Selection, SelectionError, SelectionOutcome};
pub use staircase::DifficultyStaircase;
