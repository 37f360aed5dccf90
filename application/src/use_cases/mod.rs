//! Use cases (application services)

pub mod build_survey;
pub mod export_survey;
