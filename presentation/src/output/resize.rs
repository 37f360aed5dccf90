//! Reports rendered height changes to an embedding host

use std::cell::Cell;
use std::sync::Arc;
use survey_application::{HostMessage, HostNotifier};
use tracing::trace;

/// Tracks the height of the last rendered view and posts a resize message
/// whenever it changes.
pub struct ResizeTracker {
    notifier: Arc<dyn HostNotifier>,
    last: Cell<Option<usize>>,
}

impl ResizeTracker {
    pub fn new(notifier: Arc<dyn HostNotifier>) -> Self {
        Self {
            notifier,
            last: Cell::new(None),
        }
    }

    /// Record a freshly rendered view. Height is its line count.
    pub fn observe(&self, rendered: &str) {
        let height = rendered.lines().count();
        if self.last.get() == Some(height) {
            return;
        }
        trace!("View height changed to {}", height);
        self.last.set(Some(height));
        self.notifier.notify(HostMessage::Resize { height });
    }

    pub fn last_height(&self) -> Option<usize> {
        self.last.get()
    }
}
