// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use parking_lot::RwLock;
use tracing::warn;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository,
    DynFilterSnapshotsRepository, DynTaskApiService, DynTaskCollaborationService,
    DynTasksRepository, WriteFailurePolicy,
};
use crate::client_event::Notification;
use crate::domain::shared::models::{RoomId, RoomKind, TaskId};
use crate::domain::tasks::models::{FilterPredicate, Task, TaskStatusKind};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct TasksService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connected_rooms_repo: DynConnectedRoomsRepository,
    #[inject]
    tasks_repo: DynTasksRepository,
    #[inject]
    task_api_service: DynTaskApiService,
    #[inject]
    task_collaboration_service: DynTaskCollaborationService,
    #[inject]
    filter_snapshots_repo: DynFilterSnapshotsRepository,
    /// Invalidates scheduled refreshes when a newer one supersedes them.
    refresh_generation: Arc<AtomicU64>,
    current_filter: Arc<RwLock<FilterPredicate>>,
}

impl TasksService {
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks_repo.get_all()
    }

    pub fn current_filter(&self) -> FilterPredicate {
        self.current_filter.read().clone()
    }

    /// Applies a filter to the task list. The reload is debounced so rapid
    /// filter changes cause a single request.
    pub fn set_filter(&self, view: &str, predicate: FilterPredicate) {
        *self.current_filter.write() = predicate.clone();

        if let Ok(user_id) = self.ctx.current_user_id() {
            self.filter_snapshots_repo
                .put(&user_id, view, predicate.clone());
        }

        let generation = self.refresh_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let debounce = self.ctx.config.task_refresh_debounce;
        let generation_counter = self.refresh_generation.clone();
        let api = self.task_api_service.clone();
        let repo = self.tasks_repo.clone();
        let dispatcher = self.client_event_dispatcher.clone();

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if generation_counter.load(Ordering::SeqCst) != generation {
                return;
            }
            if let Err(err) = Self::load_and_apply(predicate, api, repo, dispatcher).await {
                warn!("Failed to refresh the task list: {err}");
            }
        });
    }

    /// Reloads the task list immediately, cancelling any pending debounced
    /// refresh.
    pub async fn refresh_now(&self) -> Result<()> {
        self.refresh_generation.fetch_add(1, Ordering::SeqCst);
        Self::load_and_apply(
            self.current_filter(),
            self.task_api_service.clone(),
            self.tasks_repo.clone(),
            self.client_event_dispatcher.clone(),
        )
        .await
    }

    /// Changes a task's status. Requires the task's room to be joined with
    /// write access.
    pub async fn update_task_status(
        &self,
        task_id: TaskId,
        status: TaskStatusKind,
    ) -> Result<()> {
        let Some(mut task) = self.tasks_repo.get(&task_id) else {
            bail!("No task with id {task_id} is loaded.");
        };
        self.require_writable_task_room(task_id)?;

        let previous_status = task.status;
        task.status = status;
        self.tasks_repo.apply(task);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::TaskListChanged);

        if let Err(err) = self
            .task_collaboration_service
            .send_status_change(&task_id, status)
            .await
        {
            warn!("Failed to send status change for task {task_id}: {err}");
            match self.ctx.config.write_failure_policy {
                WriteFailurePolicy::KeepOptimistic => {
                    self.dispatch_notification(Notification::warning(
                        "The status change couldn't be delivered.",
                    ));
                }
                WriteFailurePolicy::Revert => {
                    if let Some(mut task) = self.tasks_repo.get(&task_id) {
                        task.status = previous_status;
                        self.tasks_repo.apply(task);
                        self.client_event_dispatcher
                            .dispatch_event(ClientEvent::TaskListChanged);
                    }
                    self.dispatch_notification(Notification::error(
                        "The status change couldn't be delivered and was undone.",
                    ));
                }
            }
        }

        Ok(())
    }

    /// Posts a comment to the task's room.
    pub async fn add_comment(&self, task_id: TaskId, body: impl AsRef<str>) -> Result<()> {
        let body = body.as_ref().trim();
        if body.is_empty() {
            bail!("Cannot post an empty comment.");
        }
        self.require_writable_task_room(task_id)?;

        if let Err(err) = self
            .task_collaboration_service
            .send_comment(&task_id, body)
            .await
        {
            warn!("Failed to send comment for task {task_id}: {err}");
            self.dispatch_notification(Notification::warning(
                "Your comment couldn't be delivered.",
            ));
        }

        Ok(())
    }

    async fn load_and_apply(
        predicate: FilterPredicate,
        api: DynTaskApiService,
        repo: DynTasksRepository,
        dispatcher: DynClientEventDispatcher,
    ) -> Result<()> {
        let params = predicate.query_params();
        let mut tasks = api.load_tasks(&params).await?;

        // The backend has no notion of "hide completed", it is applied on
        // top of whatever the query returned.
        if predicate.hide_completed {
            tasks.retain(|task| !task.status.is_completed());
        }

        repo.replace(tasks);
        dispatcher.dispatch_event(ClientEvent::TaskListChanged);
        Ok(())
    }

    fn require_writable_task_room(&self, task_id: TaskId) -> Result<()> {
        let room_id = RoomId::Task(task_id);
        let Some(room) = self.connected_rooms_repo.get(RoomKind::Task) else {
            bail!("The task room for task {task_id} is not joined.");
        };
        if room.id != room_id {
            bail!("The task room for task {task_id} is not joined.");
        }
        if room.is_listen_only() {
            bail!("The task room is in listen-only mode. Changes cannot be sent right now.");
        }
        Ok(())
    }

    fn dispatch_notification(&self, notification: Notification) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::NotificationPosted { notification });
    }
}
