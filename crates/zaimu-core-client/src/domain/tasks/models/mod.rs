// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use filter::{FilterName, FilterPredicate, FilterPreferences, SavedFilter};
pub use task::{Task, TaskStatusKind};

mod filter;
mod task;
