//! Configuration value objects shared with the config loader.

pub mod validation;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
