//! Configuration file loading for survey-creator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./survey.toml` or `./.survey.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/survey-creator/config.toml`
//! 4. Fallback: `~/.config/survey-creator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileEmbedConfig, FileEngineConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
