//! Plain-text survey export

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// File name used when the survey is downloaded
pub const EXPORT_FILE_NAME: &str = "customer-discovery-survey.txt";

const FULL_HEADER: &str = "Customer Discovery Survey

Goal: Understanding our customers better to improve how we serve you.

Instructions: Please answer as openly and honestly as possible. Your responses will help us understand your needs and challenges better.

Questions:
";

const CLIPBOARD_HEADER: &str = "Customer Discovery Survey

Questions:
";

/// Which text layout to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportVariant {
    /// Downloadable document with goal and instructions
    #[default]
    Full,
    /// Condensed header for pasting
    Clipboard,
}

impl fmt::Display for ExportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportVariant::Full => write!(f, "full"),
            ExportVariant::Clipboard => write!(f, "clipboard"),
        }
    }
}

impl std::str::FromStr for ExportVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "file" => Ok(ExportVariant::Full),
            "clipboard" | "copy" => Ok(ExportVariant::Clipboard),
            _ => Err(DomainError::UnknownVariant(s.to_string())),
        }
    }
}

/// Render the selected questions, numbered from 1, in the given layout.
pub fn format_survey<S: AsRef<str>>(selected: &[S], variant: ExportVariant) -> String {
    match variant {
        ExportVariant::Full => {
            let body = selected
                .iter()
                .enumerate()
                .map(|(i, q)| format!("{}. {}\n", i + 1, q.as_ref()))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}{}", FULL_HEADER, body)
        }
        ExportVariant::Clipboard => {
            let body = selected
                .iter()
                .enumerate()
                .map(|(i, q)| format!("{}. {}", i + 1, q.as_ref()))
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("{}{}", CLIPBOARD_HEADER, body)
        }
    }
}
