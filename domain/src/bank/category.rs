//! Research area (question category) definitions

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A research area the user wants to learn about.
///
/// Each key maps 1:1 to a fixed pool of question templates (see
/// [`question_pool`](super::questions::question_pool)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKey {
    Demographics,
    PainPoints,
    JobsToBeDone,
    Motivations,
    Purchasing,
    Hesitations,
    Language,
    Triggers,
    Competitors,
}

impl CategoryKey {
    /// All categories in display order
    pub const ALL: [CategoryKey; 9] = [
        CategoryKey::Demographics,
        CategoryKey::PainPoints,
        CategoryKey::JobsToBeDone,
        CategoryKey::Motivations,
        CategoryKey::Purchasing,
        CategoryKey::Hesitations,
        CategoryKey::Language,
        CategoryKey::Triggers,
        CategoryKey::Competitors,
    ];

    /// Stable kebab-case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Demographics => "demographics",
            CategoryKey::PainPoints => "pain-points",
            CategoryKey::JobsToBeDone => "jobs-to-be-done",
            CategoryKey::Motivations => "motivations",
            CategoryKey::Purchasing => "purchasing",
            CategoryKey::Hesitations => "hesitations",
            CategoryKey::Language => "language",
            CategoryKey::Triggers => "triggers",
            CategoryKey::Competitors => "competitors",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Demographics => "Demographics & Role Details",
            CategoryKey::PainPoints => "Pain Points & Challenges",
            CategoryKey::JobsToBeDone => "Jobs-to-be-Done & Goals",
            CategoryKey::Motivations => "Motivations & Drivers",
            CategoryKey::Purchasing => "Purchasing Behavior",
            CategoryKey::Hesitations => "Hesitations & Concerns",
            CategoryKey::Language => "Language & Voice",
            CategoryKey::Triggers => "Purchase Triggers",
            CategoryKey::Competitors => "Competitors & Alternatives",
        }
    }

    /// Number of questions drawn from this category per generation
    pub fn default_quota(&self) -> usize {
        match self {
            CategoryKey::PainPoints | CategoryKey::JobsToBeDone => 5,
            _ => 4,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        CategoryKey::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_key() {
        assert_eq!(CategoryKey::PainPoints.to_string(), "pain-points");
        assert_eq!(CategoryKey::JobsToBeDone.to_string(), "jobs-to-be-done");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            "Competitors".parse::<CategoryKey>().unwrap(),
            CategoryKey::Competitors
        );
        assert_eq!(
            " pain-points ".parse::<CategoryKey>().unwrap(),
            CategoryKey::PainPoints
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "pricing".parse::<CategoryKey>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("pricing".to_string()));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&CategoryKey::JobsToBeDone).unwrap();
        assert_eq!(json, "\"jobs-to-be-done\"");
        let key: CategoryKey = serde_json::from_str("\"triggers\"").unwrap();
        assert_eq!(key, CategoryKey::Triggers);
    }

    #[test]
    fn test_quotas() {
        assert_eq!(CategoryKey::PainPoints.default_quota(), 5);
        assert_eq!(CategoryKey::JobsToBeDone.default_quota(), 5);
        assert_eq!(CategoryKey::Demographics.default_quota(), 4);
        assert_eq!(CategoryKey::Competitors.default_quota(), 4);
    }
}
