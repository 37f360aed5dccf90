//! Survey text export.

pub mod format;

pub use format::{EXPORT_FILE_NAME, ExportVariant, format_survey};
