// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use parking_lot::RwLock;

use zaimu_realtime::EndpointResolver;

use crate::domain::shared::models::UserId;

/// What happens to optimistic local state when the corresponding remote
/// write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteFailurePolicy {
    /// Keep the local change and surface a notification.
    #[default]
    KeepOptimistic,
    /// Roll the local change back.
    Revert,
}

pub struct AppConfig {
    /// How often the join path waits for the connection to become ready
    /// before degrading the room to listen-only.
    pub join_retry_attempts: u32,
    /// Wait budget of the first join attempt. Subsequent attempts wait
    /// `base * attempt`.
    pub join_retry_base_delay: Duration,
    /// How long a typing indicator stays alive without a refresh.
    pub typing_expiry: Duration,
    /// Debounce window between a filter change and the task list reload.
    pub task_refresh_debounce: Duration,
    pub write_failure_policy: WriteFailurePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            join_retry_attempts: 4,
            join_retry_base_delay: Duration::from_millis(250),
            typing_expiry: Duration::from_secs(5),
            task_refresh_debounce: Duration::from_millis(300),
            write_failure_policy: WriteFailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionProperties {
    pub user_id: UserId,
    pub display_name: String,
}

pub struct AppContext {
    pub session: RwLock<Option<SessionProperties>>,
    pub socket_endpoint: EndpointResolver,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(socket_endpoint: EndpointResolver, config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            socket_endpoint,
            config,
        }
    }

    pub fn current_user_id(&self) -> Result<UserId> {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user_id)
            .ok_or(anyhow::anyhow!(
                "Failed to read the user's id since the client is not connected."
            ))
    }

    pub fn display_name(&self) -> Result<String> {
        self.session
            .read()
            .as_ref()
            .map(|s| s.display_name.clone())
            .ok_or(anyhow::anyhow!(
                "Failed to read the user's display name since the client is not connected."
            ))
    }

    pub fn set_session(&self, session: SessionProperties) {
        self.session.write().replace(session);
    }

    pub fn reset_session(&self) {
        self.session.write().take();
    }
}
