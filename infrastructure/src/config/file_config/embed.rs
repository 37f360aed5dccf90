//! Embedding configuration from TOML (`[embed]` section)

use serde::{Deserialize, Serialize};

/// Raw embedding configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEmbedConfig {
    /// File that receives host messages (one JSON object per line)
    pub host_messages: Option<String>,
}
