//! Respondent adapters

pub mod console;

pub use console::{ConsoleRespondent, InputAction, parse_input};
