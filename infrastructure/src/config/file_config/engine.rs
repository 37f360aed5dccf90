//! Selection engine configuration from TOML (`[engine]` section)
//!
//! ```toml
//! [engine]
//! capacity = 12        # maximum questions offered at once
//! auto_select = 6      # selected automatically on the first generation
//! max_selected = 10    # upper bound when selecting one by one
//!
//! [engine.quotas]
//! pain-points = 3      # questions drawn per research area
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use survey_domain::selection::policy::{DEFAULT_AUTO_SELECT, DEFAULT_CAPACITY, DEFAULT_MAX_SELECTED};
use survey_domain::{CategoryKey, ConfigIssue, ConfigIssueCode, SelectionPolicy};

/// Raw engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    pub capacity: usize,
    pub auto_select: usize,
    pub max_selected: usize,
    /// Per research area overrides, keyed by category key
    pub quotas: BTreeMap<String, usize>,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            auto_select: DEFAULT_AUTO_SELECT,
            max_selected: DEFAULT_MAX_SELECTED,
            quotas: BTreeMap::new(),
        }
    }
}

impl FileEngineConfig {
    /// Build the domain policy, adjusting unusable values.
    ///
    /// Returns the policy together with every adjustment made.
    pub fn to_policy(&self) -> (SelectionPolicy, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let capacity = if self.capacity == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidLimit {
                    field: "engine.capacity".to_string(),
                    value: 0,
                },
                format!("engine.capacity must be at least 1, using {}", DEFAULT_CAPACITY),
            ));
            DEFAULT_CAPACITY
        } else {
            self.capacity
        };

        let max_selected = if self.max_selected > capacity {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidLimit {
                    field: "engine.max_selected".to_string(),
                    value: self.max_selected,
                },
                format!(
                    "engine.max_selected ({}) exceeds engine.capacity, using {}",
                    self.max_selected, capacity
                ),
            ));
            capacity
        } else {
            self.max_selected
        };

        let auto_select = if self.auto_select > max_selected {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidLimit {
                    field: "engine.auto_select".to_string(),
                    value: self.auto_select,
                },
                format!(
                    "engine.auto_select ({}) exceeds engine.max_selected, using {}",
                    self.auto_select, max_selected
                ),
            ));
            max_selected
        } else {
            self.auto_select
        };

        let mut policy = SelectionPolicy::default()
            .with_capacity(capacity)
            .with_max_selected(max_selected)
            .with_auto_select(auto_select);

        for (key, quota) in &self.quotas {
            match key.parse::<CategoryKey>() {
                Ok(category) => policy = policy.with_quota(category, *quota),
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownCategory { value: key.clone() },
                    format!("engine.quotas: unknown research area '{}', ignored", key),
                )),
            }
        }

        (policy, issues)
    }
}
