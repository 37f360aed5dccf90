//! Local file system writer for exported surveys.

use std::fs;
use std::path::{Path, PathBuf};
use survey_application::ports::survey_writer::{SurveyWriterPort, WriteError};
use tracing::debug;

/// Writes survey documents to the local file system, creating parent
/// directories as needed. Existing files are overwritten.
#[derive(Debug, Clone, Default)]
pub struct LocalSurveyWriter;

impl LocalSurveyWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SurveyWriterPort for LocalSurveyWriter {
    fn write(&self, path: &Path, contents: &str) -> Result<PathBuf, WriteError> {
        let io_err = |source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, contents).map_err(io_err)?;
        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path.to_path_buf())
    }
}
