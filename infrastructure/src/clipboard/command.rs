//! Clipboard adapter that pipes text into a system clipboard tool.
//!
//! Detection order: `pbcopy` (macOS), `wl-copy` (Wayland), `xclip` and
//! `xsel` (X11), `clip.exe` (Windows and WSL). The first tool found on
//! `PATH` is used.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use survey_application::ports::clipboard::{ClipboardError, ClipboardPort};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Writes to the clipboard by running an external command with the text on
/// its standard input.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Find a clipboard tool on `PATH`.
    ///
    /// Returns `None` when none is installed, so the caller can fall back
    /// to [`UnavailableClipboard`].
    pub fn detect() -> Option<Self> {
        for (name, args) in CANDIDATES {
            if let Ok(path) = which::which(name) {
                info!("Using clipboard tool {}", path.display());
                return Some(Self::new(path, args));
            }
        }
        debug!("No clipboard tool found on PATH");
        None
    }
}

#[async_trait]
impl ClipboardPort for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ClipboardError::NotAvailable(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
            // Closing stdin lets the tool finish.
            drop(stdin);
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::WriteFailed(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )))
        }
    }
}

/// Clipboard used when no tool is available; every write fails.
pub struct UnavailableClipboard;

#[async_trait]
impl ClipboardPort for UnavailableClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotAvailable(
            "no clipboard tool found (install pbcopy, wl-copy, xclip or xsel)".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_always_fails() {
        let err = UnavailableClipboard.write_text("hi").await.unwrap_err();
        assert!(matches!(err, ClipboardError::NotAvailable(_)));
    }

    #[tokio::test]
    async fn test_missing_program_is_not_available() {
        let clipboard = CommandClipboard::new("survey-creator-no-such-tool", &[]);
        let err = clipboard.write_text("hi").await.unwrap_err();
        assert!(matches!(err, ClipboardError::NotAvailable(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_pipes_text_to_command() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("clip.txt");
        let script = format!("cat > '{}'", target.display());
        let clipboard = CommandClipboard::new("sh", &["-c", &script]);

        clipboard.write_text("1. Why?").await.unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "1. Why?");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_write_failure() {
        let clipboard = CommandClipboard::new("sh", &["-c", "cat > /dev/null; exit 3"]);
        let err = clipboard.write_text("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::WriteFailed(_)));
    }
}
