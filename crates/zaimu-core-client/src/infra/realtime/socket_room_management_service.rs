// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use zaimu_realtime::{EventName, RequestError};

use crate::app::deps::DynConnectionService;
use crate::domain::rooms::models::MemberInfo;
use crate::domain::rooms::services::{RoomError, RoomManagementService};
use crate::domain::shared::models::{RoomId, UserId};

pub struct SocketRoomManagementService {
    connection_service: DynConnectionService,
}

impl SocketRoomManagementService {
    pub fn new(connection_service: DynConnectionService) -> Self {
        Self { connection_service }
    }
}

#[derive(Deserialize)]
struct JoinAckMember {
    user_id: UserId,
    user_name: String,
}

#[derive(Deserialize)]
struct JoinAck {
    #[serde(default)]
    members: Vec<JoinAckMember>,
}

#[async_trait]
impl RoomManagementService for SocketRoomManagementService {
    async fn join_room(&self, room_id: &RoomId) -> Result<Vec<MemberInfo>, RoomError> {
        let (event, payload) = join_request(room_id);
        let ack = self.connection_service.request(event, payload).await.map_err(
            |err| match err {
                RequestError::Rejected { message } => RoomError::Rejected { message },
                err => RoomError::RequestFailed(err),
            },
        )?;

        let ack = serde_json::from_value::<JoinAck>(Value::Object(ack.data))
            .map_err(|err| RoomError::RequestFailed(RequestError::Generic {
                msg: format!("Malformed join acknowledgement: {err}"),
            }))?;

        Ok(ack
            .members
            .into_iter()
            .map(|member| MemberInfo {
                id: member.user_id,
                name: member.user_name,
            })
            .collect())
    }

    async fn leave_room(&self, room_id: &RoomId) -> Result<(), RoomError> {
        let (event, payload) = leave_request(room_id);
        self.connection_service
            .emit(event, payload)
            .map_err(|err| RoomError::RequestFailed(err.into()))
    }
}

fn join_request(room_id: &RoomId) -> (EventName, Value) {
    match room_id {
        RoomId::Channel(id) => (EventName::JoinChannel, json!({ "channel_id": id })),
        RoomId::Task(id) => (EventName::JoinTask, json!({ "task_id": id })),
    }
}

fn leave_request(room_id: &RoomId) -> (EventName, Value) {
    match room_id {
        RoomId::Channel(id) => (EventName::LeaveChannel, json!({ "channel_id": id })),
        RoomId::Task(id) => (EventName::LeaveTask, json!({ "task_id": id })),
    }
}
