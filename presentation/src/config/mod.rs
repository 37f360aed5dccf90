//! Presentation-level configuration
//!
//! Configuration for the interactive session.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the survey preview after every change
    pub show_preview: bool,
    /// Path to history file (defaults to the platform data directory)
    pub history_file: Option<PathBuf>,
    /// Directory `/export` writes to when no path is given
    pub export_dir: PathBuf,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_preview: true,
            history_file: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl ReplConfig {
    /// History file to use, falling back to `<data dir>/survey-creator/history.txt`
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("survey-creator").join("history.txt")))
    }
}
