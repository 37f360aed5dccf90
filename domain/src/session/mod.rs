//! Session state for building one survey.

pub mod entities;

pub use entities::{SurveySession, ToggleOutcome};
