// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_filter_snapshots_repository::InMemoryFilterSnapshotsRepository;
pub use in_memory_saved_filters_repository::InMemorySavedFiltersRepository;
pub use in_memory_tasks_repository::InMemoryTasksRepository;

mod in_memory_filter_snapshots_repository;
mod in_memory_saved_filters_repository;
mod in_memory_tasks_repository;
