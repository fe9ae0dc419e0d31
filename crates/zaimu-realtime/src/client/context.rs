// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use secrecy::Secret;
use tokio::sync::{oneshot, watch};
use tokio::task::AbortHandle;
use url::Url;

use crate::client::reconnect::ReconnectStrategy;
use crate::client::EventHandler;
use crate::connector::{Connection, ConnectorProvider};
use crate::event::Event;
use crate::packet::Ack;
use crate::state::ConnectionState;

pub(crate) struct Credentials {
    pub url: Url,
    pub token: Secret<String>,
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        use secrecy::ExposeSecret;
        Credentials {
            url: self.url.clone(),
            token: Secret::new(self.token.expose_secret().clone()),
        }
    }
}

pub(crate) struct ClientContext {
    pub connector_provider: ConnectorProvider,
    pub strategy: ReconnectStrategy,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub credentials: RwLock<Option<Credentials>>,
    pub state_tx: watch::Sender<ConnectionState>,
    pub reconnect_attempts: AtomicU32,
    /// Incremented on every dial. Events from connections of an older
    /// generation are discarded.
    pub connection_generation: AtomicU64,
    pub reconnect_task: Mutex<Option<AbortHandle>>,
    pub next_ack_id: AtomicU64,
    pub pending_acks: Mutex<HashMap<u64, oneshot::Sender<Ack>>>,
    pub event_handler: EventHandler,
}

impl ClientContext {
    pub fn state(&self) -> ConnectionState {
        *self.state_tx.borrow()
    }

    pub fn set_state(&self, state: ConnectionState) {
        self.state_tx.send_replace(state);
    }

    pub fn next_ack_id(&self) -> u64 {
        self.next_ack_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current_generation(&self) -> u64 {
        self.connection_generation.load(Ordering::SeqCst)
    }

    pub fn bump_generation(&self) -> u64 {
        self.connection_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn abort_reconnect_timer(&self) {
        if let Some(handle) = self.reconnect_task.lock().take() {
            handle.abort();
        }
    }

    pub fn drop_connection(&self) {
        if let Some(conn) = self.connection.write().take() {
            conn.disconnect();
        }
    }

    /// Fails every in-flight request. Their awaiting callers observe the
    /// dropped sender as a disconnect.
    pub fn clear_pending_acks(&self) {
        self.pending_acks.lock().clear();
    }

    pub fn dispatch_event(self: &Arc<Self>, event: Event) {
        let client = crate::client::Client::from(self.clone());
        let fut = (self.event_handler)(client, event);
        tokio::spawn(fut);
    }
}
