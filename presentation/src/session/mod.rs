//! Interactive survey session

pub mod command;
pub mod repl;

pub use command::{ReplCommand, parse_command};
pub use repl::{ReplOutcome, SurveyRepl};
