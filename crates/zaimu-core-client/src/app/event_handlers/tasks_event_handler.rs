// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository, DynTasksRepository,
};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler, TaskEvent};
use crate::client_event::Notification;
use crate::domain::rooms::models::MemberInfo;
use crate::domain::shared::models::RoomId;
use crate::{ClientEvent, ClientRoomEventType};

#[derive(InjectDependencies)]
pub struct TasksEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connected_rooms_repo: DynConnectedRoomsRepository,
    #[inject]
    tasks_repo: DynTasksRepository,
}

#[async_trait]
impl ServerEventHandler for TasksEventHandler {
    fn name(&self) -> &'static str {
        "tasks"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Task(event) => self.handle_task_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl TasksEventHandler {
    fn handle_task_event(&self, event: TaskEvent) -> Result<()> {
        match event {
            TaskEvent::Updated(task) => {
                let task_id = task.id;

                if self.tasks_repo.apply(task) {
                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::TaskListChanged);
                }

                let room_id = RoomId::Task(task_id);
                let is_active_room = self
                    .connected_rooms_repo
                    .get(room_id.kind())
                    .map(|room| room.id == room_id)
                    .unwrap_or(false);

                if is_active_room {
                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::TaskChanged { task_id });
                }
            }
            TaskEvent::Joined {
                task_id,
                user_id,
                user_name,
            } => {
                let room_id = RoomId::Task(task_id);
                let Some(room) = self.connected_rooms_repo.get(room_id.kind()) else {
                    debug!("Ignoring join of {user_name}. No task room is joined.");
                    return Ok(());
                };
                if room.id != room_id {
                    debug!("Ignoring join of {user_name}. Task {task_id} is not active.");
                    return Ok(());
                }

                if self
                    .ctx
                    .current_user_id()
                    .map(|id| id == user_id)
                    .unwrap_or(false)
                {
                    return Ok(());
                }

                if self.connected_rooms_repo.add_member(
                    &room_id,
                    MemberInfo {
                        id: user_id,
                        name: user_name.clone(),
                    },
                ) {
                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::RoomChanged {
                            room_id,
                            r#type: ClientRoomEventType::ParticipantsChanged,
                        });
                    self.client_event_dispatcher
                        .dispatch_event(ClientEvent::NotificationPosted {
                            notification: Notification::info(format!(
                                "{user_name} is looking at this task"
                            )),
                        });
                }
            }
        }

        Ok(())
    }
}
