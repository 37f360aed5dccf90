//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use survey_domain::ExportVariant;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Text layout printed in one-shot mode (uses domain type)
    pub format: Option<ExportVariant>,
    /// Enable colored terminal output
    pub color: bool,
    /// Directory the survey file is exported to (defaults to the working directory)
    pub export_dir: Option<String>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            export_dir: None,
        }
    }
}
