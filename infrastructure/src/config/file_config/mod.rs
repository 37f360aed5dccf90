//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod embed;
mod engine;
mod output;
mod repl;

pub use embed::FileEmbedConfig;
pub use engine::FileEngineConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use survey_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Selection engine limits and quotas
    pub engine: FileEngineConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Host page messaging
    pub embed: FileEmbedConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.engine.to_policy().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_domain::ExportVariant;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[engine]
capacity = 15
auto_select = 4
max_selected = 12

[output]
format = "full"
color = false

[repl]
show_preview = false
history_file = "~/.local/share/survey-creator/history.txt"

[embed]
host_messages = "/tmp/host.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.capacity, 15);
        assert_eq!(config.engine.auto_select, 4);
        assert_eq!(config.output.format, Some(ExportVariant::Full));
        assert!(!config.output.color);
        assert!(!config.repl.show_preview);
        assert_eq!(config.embed.host_messages.as_deref(), Some("/tmp/host.jsonl"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.engine, FileEngineConfig::default());
        assert!(config.repl.show_preview);
        assert!(config.embed.host_messages.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_engine_issues() {
        let toml_str = r#"
[engine.quotas]
budget = 3
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 1);
    }
}
