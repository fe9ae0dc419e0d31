// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::shared::models::TaskId;
use crate::domain::tasks::models::Task;
use crate::domain::tasks::repos::TasksRepository;

#[derive(Default)]
pub struct InMemoryTasksRepository {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTasksRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TasksRepository for InMemoryTasksRepository {
    fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.read().iter().find(|t| t.id == *id).cloned()
    }

    fn get_all(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }

    fn replace(&self, tasks: Vec<Task>) {
        *self.tasks.write() = tasks;
    }

    fn apply(&self, task: Task) -> bool {
        let mut tasks = self.tasks.write();
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task;
                true
            }
            None => false,
        }
    }

    fn clear_all(&self) {
        self.tasks.write().clear();
    }
}
