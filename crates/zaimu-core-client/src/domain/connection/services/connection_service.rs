// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use async_trait::async_trait;
use secrecy::Secret;
use serde_json::Value;
use url::Url;

use zaimu_realtime::{Ack, ConnectionError, ConnectionState, EmitError, EventName, RequestError};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, endpoint: &Url, token: Secret<String>)
        -> Result<(), ConnectionError>;
    async fn disconnect(&self);

    /// Starts a fresh dial when the connection gave up. A no-op otherwise.
    fn reconnect(&self);

    fn connection_state(&self) -> ConnectionState;
    async fn wait_until_connected(&self, timeout: Duration) -> bool;

    fn emit(&self, event: EventName, payload: Value) -> Result<(), EmitError>;
    async fn request(&self, event: EventName, payload: Value) -> Result<Ack, RequestError>;
}
