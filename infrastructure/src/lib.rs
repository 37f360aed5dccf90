//! Infrastructure layer for survey-creator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod clipboard;
pub mod config;
pub mod export;
pub mod messaging;

// Re-export commonly used types
pub use clipboard::{CommandClipboard, UnavailableClipboard};
pub use config::{
    ConfigLoader, FileConfig, FileEmbedConfig, FileEngineConfig, FileOutputConfig, FileReplConfig,
};
pub use export::LocalSurveyWriter;
pub use messaging::JsonlHostNotifier;
