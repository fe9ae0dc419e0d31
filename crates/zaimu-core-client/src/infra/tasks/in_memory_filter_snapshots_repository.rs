// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::shared::models::UserId;
use crate::domain::tasks::models::FilterPredicate;
use crate::domain::tasks::repos::FilterSnapshotsRepository;

#[derive(Default)]
pub struct InMemoryFilterSnapshotsRepository {
    snapshots: RwLock<HashMap<(UserId, String), FilterPredicate>>,
}

impl InMemoryFilterSnapshotsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterSnapshotsRepository for InMemoryFilterSnapshotsRepository {
    fn get(&self, user_id: &UserId, view: &str) -> Option<FilterPredicate> {
        self.snapshots
            .read()
            .get(&(*user_id, view.to_string()))
            .cloned()
    }

    fn put(&self, user_id: &UserId, view: &str, predicate: FilterPredicate) {
        self.snapshots
            .write()
            .insert((*user_id, view.to_string()), predicate);
    }

    fn clear_all(&self) {
        self.snapshots.write().clear();
    }
}
