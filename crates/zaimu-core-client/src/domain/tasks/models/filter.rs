// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use zaimu_utils::id_string;

id_string!(
    /// Saved filters are keyed by their user-visible name.
    FilterName
);

/// The criteria of a task filter. `fields` maps backend query parameters
/// (assignee, client, due date range…) to their values. `hide_completed`
/// never reaches the backend, completed tasks are filtered on the client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterPredicate {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default)]
    pub hide_completed: bool,
}

impl FilterPredicate {
    /// The query parameters to send to the task list endpoint. Null values
    /// and empty strings are omitted entirely so the backend's filter
    /// parsing never sees the literal strings "null" or "".
    pub fn query_params(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Null => return None,
                    Value::String(s) if s.is_empty() => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), value))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub name: FilterName,
    pub predicate: FilterPredicate,
    /// Built-in filters cannot be deleted, renamed or overwritten.
    #[serde(default)]
    pub is_system_default: bool,
    pub created_at: DateTime<Utc>,
}

/// A user's saved filters as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterPreferences {
    #[serde(default)]
    pub filters: Vec<SavedFilter>,
    #[serde(default)]
    pub default_filter: Option<FilterName>,
}
