//! Domain layer for survey-creator
//!
//! This crate contains the question bank, the selection engine and the
//! session state. It has no dependencies on infrastructure or presentation
//! concerns, and nothing in it performs I/O.
//!
//! # Core Concepts
//!
//! ## Question Bank
//!
//! - **Research area** ([`CategoryKey`]): a topical pool of question templates
//! - **Survey template** ([`SurveyTemplate`]): a fixed, ready-made survey
//!
//! ## Selection Engine
//!
//! - [`generate`]: draw a random, duplicate-free pool from research areas
//! - [`generate_from_template`]: apply a survey template or fill its gaps
//!
//! Both keep every selected question and never repeat a question that is
//! already on screen.

pub mod bank;
pub mod config;
pub mod context;
pub mod core;
pub mod export;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use bank::{CategoryKey, SurveyTemplate, all_questions, question_pool};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use context::{BusinessContext, BusinessType, MissingField, Placeholder, resolve_placeholders};
pub use core::error::DomainError;
pub use export::{EXPORT_FILE_NAME, ExportVariant, format_survey};
pub use selection::{
    GapSource, SelectionPolicy, TemplateOutcome, generate, generate_from_template, pick_random,
};
pub use session::{SurveySession, ToggleOutcome};
