// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::json;

use zaimu_core_client::app::deps::WriteFailurePolicy;
use zaimu_core_client::app::services::TasksService;
use zaimu_core_client::domain::rooms::models::{Room, RoomState};
use zaimu_core_client::domain::shared::models::{RoomId, TaskId, UserId};
use zaimu_core_client::domain::tasks::models::{FilterPredicate, Task, TaskStatusKind};
use zaimu_core_client::test::MockAppDependencies;
use zaimu_core_client::ClientEvent;
use zaimu_realtime::RequestError;

fn task(id: u64, status: TaskStatusKind) -> Task {
    Task {
        id: TaskId::from(id),
        name: "Prepare filing".to_string(),
        assignee: Some(UserId::from(7)),
        status,
        due_date: None,
    }
}

fn predicate_with(fields: &[(&str, serde_json::Value)], hide_completed: bool) -> FilterPredicate {
    FilterPredicate {
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<BTreeMap<_, _>>(),
        hide_completed,
    }
}

#[tokio::test(start_paused = true)]
async fn test_rapid_filter_changes_cause_a_single_reload() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.filter_snapshots_repo
        .expect_put()
        .times(2)
        .return_const(());

    // Only the second filter ever reaches the backend.
    deps.task_api_service
        .expect_load_tasks()
        .once()
        .withf(|params| params == [("client".to_string(), "4".to_string())])
        .returning(|_| Box::pin(async { Ok(vec![]) }));
    deps.tasks_repo.expect_replace().once().return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::TaskListChanged))
        .return_const(());

    let service = TasksService::from(&deps.into_deps());
    service.set_filter("board", predicate_with(&[("client", json!(3))], false));
    service.set_filter("board", predicate_with(&[("client", json!(4))], false));

    tokio::time::sleep(Duration::from_secs(1)).await;

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_hidden_completed_tasks_are_filtered_locally() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.filter_snapshots_repo.expect_put().return_const(());

    // "hide_completed" must not show up in the query.
    deps.task_api_service
        .expect_load_tasks()
        .once()
        .withf(|params| params.is_empty())
        .returning(|_| {
            Box::pin(async {
                Ok(vec![
                    task(1, TaskStatusKind::Open),
                    task(2, TaskStatusKind::Completed),
                    task(3, TaskStatusKind::Unknown),
                ])
            })
        });

    deps.tasks_repo
        .expect_replace()
        .once()
        .with(predicate::eq(vec![
            task(1, TaskStatusKind::Open),
            task(3, TaskStatusKind::Unknown),
        ]))
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::TaskListChanged))
        .return_const(());

    let service = TasksService::from(&deps.into_deps());
    service.set_filter("board", predicate_with(&[], true));

    tokio::time::sleep(Duration::from_secs(1)).await;

    Ok(())
}

#[tokio::test]
async fn test_status_change_applies_optimistically() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.tasks_repo
        .expect_get()
        .return_const(Some(task(9, TaskStatusKind::Open)));
    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Task(TaskId::from(9)),
            state: RoomState::Joined { listen_only: false },
            members: vec![],
        }));
    deps.tasks_repo
        .expect_apply()
        .once()
        .with(predicate::eq(task(9, TaskStatusKind::Completed)))
        .return_const(true);
    deps.task_collaboration_service
        .expect_send_status_change()
        .once()
        .with(
            predicate::eq(TaskId::from(9)),
            predicate::eq(TaskStatusKind::Completed),
        )
        .returning(|_, _| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::TaskListChanged))
        .return_const(());

    let service = TasksService::from(&deps.into_deps());
    service
        .update_task_status(TaskId::from(9), TaskStatusKind::Completed)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_failed_status_change_reverts_when_configured() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.config.write_failure_policy = WriteFailurePolicy::Revert;

    deps.tasks_repo
        .expect_get()
        .return_const(Some(task(9, TaskStatusKind::Open)));
    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Task(TaskId::from(9)),
            state: RoomState::Joined { listen_only: false },
            members: vec![],
        }));

    deps.tasks_repo
        .expect_apply()
        .once()
        .with(predicate::eq(task(9, TaskStatusKind::Completed)))
        .return_const(true);
    deps.task_collaboration_service
        .expect_send_status_change()
        .returning(|_, _| Box::pin(async { Err(RequestError::TimedOut) }));
    // The optimistic change is rolled back.
    deps.tasks_repo
        .expect_apply()
        .once()
        .with(predicate::eq(task(9, TaskStatusKind::Open)))
        .return_const(true);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .with(predicate::eq(ClientEvent::TaskListChanged))
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .withf(|event| matches!(event, ClientEvent::NotificationPosted { .. }))
        .return_const(());

    let service = TasksService::from(&deps.into_deps());
    service
        .update_task_status(TaskId::from(9), TaskStatusKind::Completed)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_status_change_requires_writable_task_room() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.tasks_repo
        .expect_get()
        .return_const(Some(task(9, TaskStatusKind::Open)));
    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Task(TaskId::from(9)),
            state: RoomState::Joined { listen_only: true },
            members: vec![],
        }));

    let service = TasksService::from(&deps.into_deps());
    assert!(service
        .update_task_status(TaskId::from(9), TaskStatusKind::Completed)
        .await
        .is_err());

    Ok(())
}

#[tokio::test]
async fn test_comments_cannot_be_empty() -> Result<()> {
    let deps = MockAppDependencies::default();

    let service = TasksService::from(&deps.into_deps());
    assert!(service.add_comment(TaskId::from(9), "   ").await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_comment_failure_posts_notification() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Task(TaskId::from(9)),
            state: RoomState::Joined { listen_only: false },
            members: vec![],
        }));
    deps.task_collaboration_service
        .expect_send_comment()
        .once()
        .with(predicate::eq(TaskId::from(9)), predicate::eq("On it"))
        .returning(|_, _| Box::pin(async { Err(RequestError::Disconnected) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .withf(|event| matches!(event, ClientEvent::NotificationPosted { .. }))
        .return_const(());

    let service = TasksService::from(&deps.into_deps());
    service.add_comment(TaskId::from(9), "On it").await?;

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_current_filter_reflects_last_change() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.filter_snapshots_repo.expect_put().return_const(());
    deps.task_api_service
        .expect_load_tasks()
        .returning(|_| Box::pin(async { Ok(vec![]) }));
    deps.tasks_repo.expect_replace().return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .return_const(());

    let service = TasksService::from(&deps.into_deps());
    let predicate = predicate_with(&[("assignee", json!(7))], true);
    service.set_filter("board", predicate.clone());

    assert_eq!(service.current_filter(), predicate);

    tokio::time::sleep(Duration::from_secs(1)).await;

    Ok(())
}
