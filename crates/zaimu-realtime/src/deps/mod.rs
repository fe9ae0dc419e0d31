// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::{IdProvider, UuidProvider};
pub use time_provider::{SystemTimeProvider, TimeProvider};

mod id_provider;
mod time_provider;
