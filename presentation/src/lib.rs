//! Presentation layer for survey-creator
//!
//! This crate contains CLI definitions, console formatters,
//! and the interactive survey session.

pub mod cli;
pub mod config;
pub mod output;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::{ConsoleFormatter, ResizeTracker};
pub use session::{ReplCommand, ReplOutcome, SurveyRepl, parse_command};
