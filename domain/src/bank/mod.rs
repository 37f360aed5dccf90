//! The immutable question bank.
//!
//! - [`category::CategoryKey`]: the research areas
//! - [`questions::question_pool`]: the fixed template pool for each area
//! - [`template::SurveyTemplate`]: curated ready-made surveys

pub mod category;
pub mod questions;
pub mod template;

pub use category::CategoryKey;
pub use questions::{all_questions, question_pool};
pub use template::SurveyTemplate;
