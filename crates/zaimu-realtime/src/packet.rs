// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The set of named events the backend speaks. Unknown events deserialize
/// into `Other` so newer servers don't break older clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EventName {
    Ack,
    ChatMessage,
    JoinChannel,
    JoinTask,
    LeaveChannel,
    LeaveTask,
    ReadStatus,
    TaskComment,
    TaskJoined,
    TaskStatusChange,
    TaskUpdate,
    Typing,
    TypingIndicator,
    UserJoined,
    UserLeft,
    #[strum(default)]
    Other(String),
}

impl Serialize for EventName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EventName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A single duplex frame. Requests that want a reply carry an `ack_id`;
/// the server answers with an `ack` packet bearing the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    pub event: EventName,
    #[serde(default)]
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack_id: Option<u64>,
}

impl Packet {
    pub fn new(event: EventName, payload: Value) -> Self {
        Packet {
            event,
            payload,
            ack_id: None,
        }
    }

    pub fn with_ack_id(mut self, ack_id: u64) -> Self {
        self.ack_id = Some(ack_id);
        self
    }

    pub fn is_ack(&self) -> bool {
        self.event == EventName::Ack
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AckStatus {
    Success,
    #[serde(other)]
    Failure,
}

/// Acknowledgement body. Servers are free to attach extra fields
/// (message ids, member lists); they end up in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub status: AckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: serde_json::Map<String, Value>,
}

impl Ack {
    pub fn success() -> Self {
        Ack {
            status: AckStatus::Success,
            message: None,
            data: Default::default(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Ack {
            status: AckStatus::Failure,
            message: Some(message.into()),
            data: Default::default(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AckStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serializes_packet() {
        let packet = Packet::new(
            EventName::ChatMessage,
            json!({ "channel_id": 4, "content": "hello" }),
        )
        .with_ack_id(7);

        assert_eq!(
            serde_json::to_value(&packet).unwrap(),
            json!({
                "event": "chat_message",
                "payload": { "channel_id": 4, "content": "hello" },
                "ack_id": 7
            })
        );
    }

    #[test]
    fn test_omits_missing_ack_id() {
        let packet = Packet::new(EventName::TypingIndicator, json!({ "channel_id": 1 }));
        assert_eq!(
            serde_json::to_value(&packet).unwrap(),
            json!({ "event": "typing_indicator", "payload": { "channel_id": 1 } })
        );
    }

    #[test]
    fn test_deserializes_unknown_event() {
        let packet =
            serde_json::from_value::<Packet>(json!({ "event": "server_maintenance" })).unwrap();
        assert_eq!(packet.event, EventName::Other("server_maintenance".into()));
        assert_eq!(packet.payload, Value::Null);
        assert_eq!(packet.ack_id, None);
    }

    #[test]
    fn test_deserializes_ack_with_extra_fields() {
        let ack = serde_json::from_value::<Ack>(json!({
            "status": "success",
            "message_id": 42
        }))
        .unwrap();

        assert!(ack.is_success());
        assert_eq!(ack.message, None);
        assert_eq!(ack.data.get("message_id"), Some(&json!(42)));
    }

    #[test]
    fn test_unknown_ack_status_counts_as_failure() {
        let ack = serde_json::from_value::<Ack>(json!({
            "status": "rejected",
            "message": "not a member"
        }))
        .unwrap();

        assert_eq!(ack.status, AckStatus::Failure);
        assert_eq!(ack.message.as_deref(), Some("not a member"));
    }
}
