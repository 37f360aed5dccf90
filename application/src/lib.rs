//! Application layer for survey-creator
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    clipboard::{ClipboardError, ClipboardPort},
    host_messenger::{HostMessage, HostNotifier, NoHostNotifier},
    survey_writer::{SurveyWriterPort, WriteError},
};
pub use use_cases::build_survey::{BuildSummary, BuildSurveyError, BuildSurveyUseCase};
pub use use_cases::export_survey::{ExportError, ExportNotice, ExportSurveyUseCase};
