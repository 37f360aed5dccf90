//! Survey file writer port.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Port for persisting an exported survey document.
pub trait SurveyWriterPort: Send + Sync {
    /// Write `contents` to `path`, returning the path actually written.
    fn write(&self, path: &Path, contents: &str) -> Result<PathBuf, WriteError>;
}
