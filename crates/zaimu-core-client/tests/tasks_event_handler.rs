// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;

use zaimu_core_client::app::event_handlers::{
    ServerEvent, ServerEventHandler, TaskEvent, TasksEventHandler,
};
use zaimu_core_client::domain::rooms::models::{Room, RoomState};
use zaimu_core_client::domain::shared::models::{RoomId, TaskId, UserId};
use zaimu_core_client::domain::tasks::models::{Task, TaskStatusKind};
use zaimu_core_client::test::MockAppDependencies;
use zaimu_core_client::ClientEvent;

fn task(id: u64) -> Task {
    Task {
        id: TaskId::from(id),
        name: "Prepare filing".to_string(),
        assignee: Some(UserId::from(7)),
        status: TaskStatusKind::InProgress,
        due_date: None,
    }
}

#[tokio::test]
async fn test_task_update_refreshes_list() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.tasks_repo
        .expect_apply()
        .once()
        .with(predicate::eq(task(9)))
        .return_const(true);
    deps.connected_rooms_repo
        .expect_get()
        .return_const(None::<Room>);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::TaskListChanged))
        .return_const(());

    let handler = TasksEventHandler::from(&deps.into_deps());
    handler
        .handle_event(ServerEvent::Task(TaskEvent::Updated(task(9))))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_task_update_for_active_room_also_emits_task_changed() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.tasks_repo.expect_apply().return_const(true);
    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Task(TaskId::from(9)),
            state: RoomState::Joined { listen_only: false },
            members: vec![],
        }));

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::TaskListChanged))
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::TaskChanged {
            task_id: TaskId::from(9),
        }))
        .return_const(());

    let handler = TasksEventHandler::from(&deps.into_deps());
    handler
        .handle_event(ServerEvent::Task(TaskEvent::Updated(task(9))))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_update_for_unknown_task_changes_nothing() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.tasks_repo.expect_apply().return_const(false);
    deps.connected_rooms_repo
        .expect_get()
        .return_const(None::<Room>);

    let handler = TasksEventHandler::from(&deps.into_deps());
    handler
        .handle_event(ServerEvent::Task(TaskEvent::Updated(task(9))))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_task_join_ignored_when_room_is_not_active() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Task(TaskId::from(3)),
            state: RoomState::Joined { listen_only: false },
            members: vec![],
        }));

    let handler = TasksEventHandler::from(&deps.into_deps());
    handler
        .handle_event(ServerEvent::Task(TaskEvent::Joined {
            task_id: TaskId::from(9),
            user_id: UserId::from(7),
            user_name: "Aya".to_string(),
        }))
        .await?;

    Ok(())
}
