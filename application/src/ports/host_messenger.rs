//! Host page messaging port.
//!
//! When the survey view is embedded in another page, the host needs to know
//! when the rendered content changes size. Messages are fire-and-forget:
//! there is no acknowledgment and no retry.

use serde::{Deserialize, Serialize};

/// A message posted to the embedding host.
///
/// Serializes as `{"type":"resize","height":N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostMessage {
    Resize { height: usize },
}

/// Port for notifying the embedding host.
pub trait HostNotifier: Send + Sync {
    fn notify(&self, message: HostMessage);
}

/// No-op notifier for when the view is not embedded
pub struct NoHostNotifier;

impl HostNotifier for NoHostNotifier {
    fn notify(&self, _message: HostMessage) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_wire_shape() {
        let json = serde_json::to_string(&HostMessage::Resize { height: 42 }).unwrap();
        assert_eq!(json, r#"{"type":"resize","height":42}"#);
    }

    #[test]
    fn test_resize_parses() {
        let msg: HostMessage = serde_json::from_str(r#"{"type":"resize","height":7}"#).unwrap();
        assert_eq!(msg, HostMessage::Resize { height: 7 });
    }
}
