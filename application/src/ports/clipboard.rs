//! Clipboard port.
//!
//! Writing to the system clipboard is the only operation in a session that
//! can block or fail. Callers treat a failure as a notice for the user; it
//! is never retried.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while writing to the clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard mechanism is available on this system
    #[error("Clipboard not available: {0}")]
    NotAvailable(String),

    /// The clipboard mechanism ran but did not accept the text
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Port for placing text on the user's clipboard.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
