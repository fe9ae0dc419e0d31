// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::Secret;
use serde_json::Value;
use url::Url;

use zaimu_realtime::{Ack, ConnectionError, ConnectionState, EmitError, EventName, RequestError};

use crate::domain::connection::services::ConnectionService;

/// Bridges the domain's connection seam onto the realtime transport.
pub struct RealtimeConnectionService {
    client: Arc<zaimu_realtime::Client>,
}

impl RealtimeConnectionService {
    pub fn new(client: Arc<zaimu_realtime::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConnectionService for RealtimeConnectionService {
    async fn connect(
        &self,
        endpoint: &Url,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.client.connect(endpoint, token).await
    }

    async fn disconnect(&self) {
        self.client.disconnect()
    }

    fn reconnect(&self) {
        self.client.reconnect()
    }

    fn connection_state(&self) -> ConnectionState {
        self.client.state()
    }

    async fn wait_until_connected(&self, timeout: Duration) -> bool {
        self.client.wait_until_connected(timeout).await
    }

    fn emit(&self, event: EventName, payload: Value) -> Result<(), EmitError> {
        self.client.emit(event, payload)
    }

    async fn request(&self, event: EventName, payload: Value) -> Result<Ack, RequestError> {
        self.client.request(event, payload).await
    }
}
