// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::TaskId;
use crate::domain::tasks::models::Task;

/// The currently displayed task list.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TasksRepository: Send + Sync {
    fn get(&self, id: &TaskId) -> Option<Task>;
    fn get_all(&self) -> Vec<Task>;

    fn replace(&self, tasks: Vec<Task>);

    /// Applies a server push to the list. Returns `false` when the task is
    /// not part of the current list.
    fn apply(&self, task: Task) -> bool;

    fn clear_all(&self);
}
