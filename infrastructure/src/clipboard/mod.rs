//! Clipboard adapters

mod command;

pub use command::{CommandClipboard, UnavailableClipboard};
