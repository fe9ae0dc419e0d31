// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{DynClientEventDispatcher, DynTypingIndicatorsRepository};
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::client_event::Notification;
use crate::{ClientEvent, ConnectionEvent as ClientConnectionEvent};

#[derive(InjectDependencies)]
pub struct ConnectionEventHandler {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    typing_indicators_repo: DynTypingIndicatorsRepository,
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event).await?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    async fn handle_connection_event(&self, event: ConnectionEvent) -> Result<()> {
        match event {
            ConnectionEvent::Connected => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Connect,
                    });
            }
            ConnectionEvent::Disconnected { error } => {
                // Composing state is worthless across a connection gap.
                self.typing_indicators_repo.clear_all();
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Disconnect { error },
                    });
            }
            ConnectionEvent::Reconnecting { attempt } => {
                info!("Reconnecting (attempt {attempt})…");
            }
            ConnectionEvent::PermanentlyFailed { error } => {
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::ConnectionStatusChanged {
                        event: ClientConnectionEvent::Failed {
                            error: error.clone(),
                        },
                    });
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::NotificationPosted {
                        notification: Notification::error(format!(
                            "Lost the realtime connection: {error}"
                        )),
                    });
            }
        }
        Ok(())
    }
}
