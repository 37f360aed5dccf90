//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod clipboard;
pub mod host_messenger;
pub mod survey_writer;
