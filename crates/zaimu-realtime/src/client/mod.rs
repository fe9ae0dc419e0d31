// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use builder::ClientBuilder;
pub use client::Client;
pub use reconnect::ReconnectStrategy;

mod builder;
#[allow(clippy::module_inception)]
mod client;
mod context;
mod reconnect;

use crate::event::Event;
use crate::util::PinnedFuture;

pub type EventHandler = Box<dyn Fn(Client, Event) -> PinnedFuture<()> + Send + Sync>;
