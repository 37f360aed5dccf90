//! Where gap-filling draws replacement questions from

use crate::bank::{CategoryKey, all_questions, question_pool};
use crate::core::error::DomainError;
use std::fmt;

/// Source pool for replacing unselected questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapSource {
    /// Union of every category pool
    #[default]
    Any,
    Category(CategoryKey),
}

impl GapSource {
    /// Template strings this source can draw from
    pub fn templates(&self) -> Vec<&'static str> {
        match self {
            GapSource::Any => all_questions(),
            GapSource::Category(category) => question_pool(*category).to_vec(),
        }
    }
}

impl fmt::Display for GapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapSource::Any => write!(f, "any"),
            GapSource::Category(category) => write!(f, "{}", category),
        }
    }
}

impl std::str::FromStr for GapSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(GapSource::Any);
        }
        s.parse().map(GapSource::Category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("any".parse::<GapSource>().unwrap(), GapSource::Any);
        assert_eq!("ANY".parse::<GapSource>().unwrap(), GapSource::Any);
        assert_eq!(
            "competitors".parse::<GapSource>().unwrap(),
            GapSource::Category(CategoryKey::Competitors)
        );
        assert!("everything".parse::<GapSource>().is_err());
    }

    #[test]
    fn test_templates() {
        assert_eq!(
            GapSource::Category(CategoryKey::PainPoints).templates().len(),
            10
        );
        assert_eq!(GapSource::Any.templates().len(), all_questions().len());
    }
}
