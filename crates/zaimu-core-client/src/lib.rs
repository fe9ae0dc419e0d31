// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientDelegate};
pub use client_builder::ClientBuilder;
pub use client_event::{ClientEvent, ClientRoomEventType, ConnectionEvent, Notification};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub mod dtos {
    pub use crate::app::dtos::*;
}
