// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use client_event_dispatcher::ClientEventDispatcher;
pub use connection_event_handler::ConnectionEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use rooms_event_handler::RoomsEventHandler;
pub use server_event::*;
pub use tasks_event_handler::TasksEventHandler;

use crate::ClientEvent;

mod client_event_dispatcher;
mod connection_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod rooms_event_handler;
mod server_event;
mod tasks_event_handler;

/// A handler in the server-event pipeline. `handle_event` either consumes
/// the event by returning `None` or passes it on to the next handler by
/// returning `Some(event)`.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
