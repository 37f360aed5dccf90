//! Business context and placeholder resolution.

pub mod business;
pub mod placeholder;

pub use business::{BusinessContext, BusinessType, MissingField};
pub use placeholder::{Placeholder, relevant_area, relevant_process, resolve_placeholders};
