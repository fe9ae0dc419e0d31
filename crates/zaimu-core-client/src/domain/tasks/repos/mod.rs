// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use filter_snapshots_repository::FilterSnapshotsRepository;
pub use saved_filters_repository::SavedFiltersRepository;
pub use tasks_repository::TasksRepository;
#[cfg(feature = "test")]
pub use filter_snapshots_repository::MockFilterSnapshotsRepository;
#[cfg(feature = "test")]
pub use saved_filters_repository::MockSavedFiltersRepository;
#[cfg(feature = "test")]
pub use tasks_repository::MockTasksRepository;

mod filter_snapshots_repository;
mod saved_filters_repository;
mod tasks_repository;
