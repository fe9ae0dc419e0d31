// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder, ReconnectStrategy};
pub use connector::{Connection, ConnectionError, Connector, ConnectorProvider, EndpointResolver};
pub use deps::{IdProvider, SystemTimeProvider, TimeProvider, UuidProvider};
pub use event::Event;
pub use packet::{Ack, AckStatus, EventName, Packet};
pub use state::ConnectionState;
pub use util::{EmitError, PinnedFuture, RequestError};

pub mod client;
pub mod connector;
mod deps;
mod event;
mod packet;
mod state;
mod util;

#[cfg(feature = "test")]
pub mod test;
