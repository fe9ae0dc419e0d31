// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;
use crate::domain::tasks::models::FilterPredicate;

/// Remembers the last filter a user applied per task view, so returning to
/// a view restores its filter within the session.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FilterSnapshotsRepository: Send + Sync {
    fn get(&self, user_id: &UserId, view: &str) -> Option<FilterPredicate>;
    fn put(&self, user_id: &UserId, view: &str, predicate: FilterPredicate);
    fn clear_all(&self);
}
