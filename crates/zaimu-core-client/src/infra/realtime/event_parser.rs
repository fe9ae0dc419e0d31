// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use zaimu_realtime::{Event, EventName, Packet};

use crate::app::event_handlers::{
    ConnectionEvent, MessageEvent, PresenceEvent, PresenceKind, ServerEvent, TaskEvent,
    TypingEvent,
};
use crate::domain::messaging::models::{MessageId, MessageServerId};
use crate::domain::shared::models::{ChannelId, RoomId, TaskId, UserId};
use crate::domain::tasks::models::Task;

/// Translates a transport event into a `ServerEvent` for the handler
/// pipeline. Returns `None` for events that carry no information for us,
/// like pushes for event names this client version doesn't know.
pub fn parse_event(event: Event) -> Result<Option<ServerEvent>> {
    let event = match event {
        Event::Connected => ServerEvent::Connection(ConnectionEvent::Connected),
        Event::Disconnected { error } => {
            ServerEvent::Connection(ConnectionEvent::Disconnected { error })
        }
        Event::Reconnecting { attempt } => {
            ServerEvent::Connection(ConnectionEvent::Reconnecting { attempt })
        }
        Event::ConnectionFailed { error } => {
            ServerEvent::Connection(ConnectionEvent::PermanentlyFailed { error })
        }
        Event::Packet(packet) => match parse_packet(packet)? {
            Some(event) => event,
            None => return Ok(None),
        },
    };
    Ok(Some(event))
}

fn parse_packet(packet: Packet) -> Result<Option<ServerEvent>> {
    let event = match &packet.event {
        EventName::ChatMessage => {
            let payload = packet.payload::<MessagePayload>()?;
            ServerEvent::Message(MessageEvent {
                channel_id: payload.channel_id,
                server_id: payload.message_id,
                user_id: payload.user_id,
                user_name: payload.user_name,
                body: payload.content,
                client_id: payload.client_id,
                timestamp: payload.timestamp,
            })
        }
        EventName::Typing => {
            let payload = packet.payload::<TypingPayload>()?;
            ServerEvent::Typing(TypingEvent {
                channel_id: payload.channel_id,
                user_id: payload.user_id,
                is_typing: payload.is_typing,
            })
        }
        EventName::UserJoined => {
            ServerEvent::Presence(packet.payload::<PresencePayload>()?.into_event(PresenceKind::Joined)?)
        }
        EventName::UserLeft => {
            ServerEvent::Presence(packet.payload::<PresencePayload>()?.into_event(PresenceKind::Left)?)
        }
        EventName::TaskUpdate => ServerEvent::Task(TaskEvent::Updated(packet.payload::<Task>()?)),
        EventName::TaskJoined => {
            let payload = packet.payload::<TaskJoinedPayload>()?;
            ServerEvent::Task(TaskEvent::Joined {
                task_id: payload.task_id,
                user_id: payload.user_id,
                user_name: payload.user_name,
            })
        }
        EventName::Other(name) => {
            debug!("Ignoring unknown server event '{name}'.");
            return Ok(None);
        }
        _ => {
            debug!("Ignoring unexpected server event '{}'.", packet.event);
            return Ok(None);
        }
    };
    Ok(Some(event))
}

#[derive(Deserialize)]
struct MessagePayload {
    channel_id: ChannelId,
    message_id: MessageServerId,
    user_id: UserId,
    user_name: String,
    content: String,
    #[serde(default)]
    client_id: Option<MessageId>,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct TypingPayload {
    channel_id: ChannelId,
    user_id: UserId,
    is_typing: bool,
}

#[derive(Deserialize)]
struct TaskJoinedPayload {
    task_id: TaskId,
    user_id: UserId,
    user_name: String,
}

#[derive(Deserialize)]
struct PresencePayload {
    #[serde(default)]
    channel_id: Option<ChannelId>,
    #[serde(default)]
    task_id: Option<TaskId>,
    user_id: UserId,
    user_name: String,
}

impl PresencePayload {
    fn into_event(self, kind: PresenceKind) -> Result<PresenceEvent> {
        let room_id = match (self.channel_id, self.task_id) {
            (Some(channel_id), _) => RoomId::Channel(channel_id),
            (None, Some(task_id)) => RoomId::Task(task_id),
            (None, None) => bail!("Presence event without a room."),
        };
        Ok(PresenceEvent {
            kind,
            room_id,
            user_id: self.user_id,
            user_name: self.user_name,
        })
    }
}

trait PacketExt {
    fn payload<T: serde::de::DeserializeOwned>(&self) -> Result<T>;
}

impl PacketExt for Packet {
    fn payload<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.payload.clone())
            .with_context(|| format!("Malformed payload for event '{}'", self.event))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parses_chat_message() {
        let packet = Packet::new(
            EventName::ChatMessage,
            json!({
                "channel_id": 4,
                "message_id": 1200,
                "user_id": 7,
                "user_name": "Aya",
                "content": "Morning!",
                "client_id": "temp-abc",
                "timestamp": "2024-05-01T09:00:00Z",
            }),
        );

        let event = parse_event(Event::Packet(packet)).unwrap().unwrap();

        let ServerEvent::Message(message) = event else {
            panic!("Expected a message event");
        };
        assert_eq!(message.channel_id, ChannelId::from(4));
        assert_eq!(message.server_id, MessageServerId::from(1200));
        assert_eq!(message.client_id, Some(MessageId::from("temp-abc")));
        assert_eq!(message.body, "Morning!");
    }

    #[test]
    fn test_parses_presence_for_task_rooms() {
        let packet = Packet::new(
            EventName::UserJoined,
            json!({ "task_id": 9, "user_id": 3, "user_name": "Ken" }),
        );

        let event = parse_event(Event::Packet(packet)).unwrap().unwrap();

        assert_eq!(
            event,
            ServerEvent::Presence(PresenceEvent {
                kind: PresenceKind::Joined,
                room_id: RoomId::Task(TaskId::from(9)),
                user_id: UserId::from(3),
                user_name: "Ken".to_string(),
            })
        );
    }

    #[test]
    fn test_parses_inbound_typing() {
        let packet = Packet::new(
            EventName::Typing,
            json!({ "channel_id": 4, "user_id": 7, "is_typing": true }),
        );

        let event = parse_event(Event::Packet(packet)).unwrap().unwrap();

        assert_eq!(
            event,
            ServerEvent::Typing(TypingEvent {
                channel_id: ChannelId::from(4),
                user_id: UserId::from(7),
                is_typing: true,
            })
        );
    }

    #[test]
    fn test_parses_task_joined() {
        let packet = Packet::new(
            EventName::TaskJoined,
            json!({ "task_id": 9, "user_id": 3, "user_name": "Ken" }),
        );

        let event = parse_event(Event::Packet(packet)).unwrap().unwrap();

        assert_eq!(
            event,
            ServerEvent::Task(TaskEvent::Joined {
                task_id: TaskId::from(9),
                user_id: UserId::from(3),
                user_name: "Ken".to_string(),
            })
        );
    }

    #[test]
    fn test_ignores_unknown_events() {
        let packet = Packet::new(
            EventName::Other("billing_update".to_string()),
            json!({ "invoice": 12 }),
        );
        assert_eq!(parse_event(Event::Packet(packet)).unwrap(), None);
    }

    #[test]
    fn test_rejects_malformed_payloads() {
        let packet = Packet::new(EventName::ChatMessage, json!({ "channel_id": "nope" }));
        assert!(parse_event(Event::Packet(packet)).is_err());
    }
}
