//! Sync bus message types and wire format
//!
//! Shared between tandoor-server and clients. Messages travel over a plain
//! TCP channel as length-prefixed JSON frames:
//!
//! ```text
//! ┌──────────┬──────────────┬───────────┐
//! │ type: u8 │ len: u32 BE  │ JSON body │
//! └──────────┴──────────────┴───────────┘
//! ```
//!
//! The channel carries "something changed" signals only — clients re-fetch
//! through the HTTP API. Delivery is at-least-once per connection and no
//! ordering is guaranteed between resources; a missed frame is recovered by
//! the next manual refresh.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted frame body, guards against a corrupt length prefix
pub const MAX_FRAME_LEN: u32 = 1024 * 1024;

/// Sync bus event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Collection-level change signal
    Sync = 0,
    /// Operational notice (shutdown, maintenance)
    Notification = 1,
}

impl TryFrom<u8> for EventType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventType::Sync),
            1 => Ok(EventType::Notification),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Sync => write!(f, "sync"),
            EventType::Notification => write!(f, "notification"),
        }
    }
}

/// Change-feed payload
///
/// `version` increases monotonically per resource, so a client can discard
/// a frame that arrives after a newer one has already been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Resource collection, e.g. "order", "menu_item", "settings"
    pub resource: String,
    /// "created" | "updated" | "deleted" | "status_changed"
    pub action: String,
    /// Record ID, empty for collection-wide changes
    pub id: String,
    pub version: u64,
}

/// Operational notice payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub level: String,
    pub message: String,
}

/// A message on the sync bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BusMessage {
    Sync(SyncPayload),
    Notification(NotificationPayload),
}

impl BusMessage {
    pub fn sync(payload: SyncPayload) -> Self {
        BusMessage::Sync(payload)
    }

    pub fn event_type(&self) -> EventType {
        match self {
            BusMessage::Sync(_) => EventType::Sync,
            BusMessage::Notification(_) => EventType::Notification,
        }
    }

    /// Encode into a wire frame
    pub fn encode_frame(&self) -> Result<Vec<u8>, FrameError> {
        let body = match self {
            BusMessage::Sync(p) => serde_json::to_vec(p)?,
            BusMessage::Notification(p) => serde_json::to_vec(p)?,
        };
        if body.len() as u64 > MAX_FRAME_LEN as u64 {
            return Err(FrameError::TooLarge(body.len()));
        }
        let mut frame = Vec::with_capacity(5 + body.len());
        frame.push(self.event_type() as u8);
        frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
        frame.extend_from_slice(&body);
        Ok(frame)
    }

    /// Decode a frame body given its type byte
    pub fn decode_body(event_type: u8, body: &[u8]) -> Result<Self, FrameError> {
        let event_type = EventType::try_from(event_type)
            .map_err(|_| FrameError::UnknownEventType(event_type))?;
        Ok(match event_type {
            EventType::Sync => BusMessage::Sync(serde_json::from_slice(body)?),
            EventType::Notification => BusMessage::Notification(serde_json::from_slice(body)?),
        })
    }
}

/// Wire format errors
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("unknown event type: {0}")]
    UnknownEventType(u8),

    #[error("frame body too large: {0} bytes")]
    TooLarge(usize),

    #[error("frame codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_round_trip() {
        let msg = BusMessage::Sync(SyncPayload {
            resource: "order".into(),
            action: "created".into(),
            id: "order:abc".into(),
            version: 7,
        });

        let frame = msg.encode_frame().unwrap();
        assert_eq!(frame[0], EventType::Sync as u8);
        let len = u32::from_be_bytes(frame[1..5].try_into().unwrap()) as usize;
        assert_eq!(len, frame.len() - 5);

        let decoded = BusMessage::decode_body(frame[0], &frame[5..]).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        assert!(matches!(
            BusMessage::decode_body(9, b"{}"),
            Err(FrameError::UnknownEventType(9))
        ));
    }
}
