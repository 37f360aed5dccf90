//! Export Survey use case.
//!
//! Turns the selected questions into text and hands it to an adapter:
//! a file for download, or the clipboard. Clipboard failures are reported
//! as a notice for the user and never propagated.

use crate::ports::clipboard::ClipboardPort;
use crate::ports::survey_writer::{SurveyWriterPort, WriteError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use survey_domain::{EXPORT_FILE_NAME, ExportVariant, SurveySession, format_survey};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No questions selected")]
    NothingSelected,

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// User-facing result of a clipboard copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    Copied { count: usize },
    CopyFailed { reason: String },
}

impl ExportNotice {
    pub fn message(&self) -> &'static str {
        match self {
            ExportNotice::Copied { .. } => "Survey copied to clipboard!",
            ExportNotice::CopyFailed { .. } => {
                "Copy failed, but you can manually select and copy the text."
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExportNotice::Copied { .. })
    }
}

/// Use case for exporting the selected questions.
pub struct ExportSurveyUseCase {
    clipboard: Arc<dyn ClipboardPort>,
    writer: Arc<dyn SurveyWriterPort>,
}

impl ExportSurveyUseCase {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, writer: Arc<dyn SurveyWriterPort>) -> Self {
        Self { clipboard, writer }
    }

    /// Render the selection without sending it anywhere
    pub fn render(&self, session: &SurveySession, variant: ExportVariant) -> String {
        format_survey(session.selected(), variant)
    }

    /// Write the full survey document into `dir` as
    /// `customer-discovery-survey.txt`.
    pub fn export_to_file(
        &self,
        session: &SurveySession,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        self.export_to_path(session, &dir.join(EXPORT_FILE_NAME))
    }

    /// Write the full survey document to an explicit path
    pub fn export_to_path(
        &self,
        session: &SurveySession,
        path: &Path,
    ) -> Result<PathBuf, ExportError> {
        if session.selected().is_empty() {
            return Err(ExportError::NothingSelected);
        }
        let text = self.render(session, ExportVariant::Full);
        let written = self.writer.write(path, &text)?;
        info!(
            "Exported {} questions to {}",
            session.selected().len(),
            written.display()
        );
        Ok(written)
    }

    /// Copy the condensed survey to the clipboard.
    pub async fn copy_to_clipboard(
        &self,
        session: &SurveySession,
    ) -> Result<ExportNotice, ExportError> {
        if session.selected().is_empty() {
            return Err(ExportError::NothingSelected);
        }
        let text = self.render(session, ExportVariant::Clipboard);
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                info!("Copied {} questions to clipboard", session.selected().len());
                Ok(ExportNotice::Copied {
                    count: session.selected().len(),
                })
            }
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                Ok(ExportNotice::CopyFailed {
                    reason: e.to_string(),
                })
            }
        }
    }
}
