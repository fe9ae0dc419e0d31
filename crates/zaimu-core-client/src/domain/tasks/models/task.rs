// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{TaskId, UserId};

/// Coarse task status as defined by the backend contract. Statuses
/// introduced by newer servers land in `Unknown` and are treated as not
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatusKind {
    Open,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TaskStatusKind {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatusKind::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub assignee: Option<UserId>,
    pub status: TaskStatusKind,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}
