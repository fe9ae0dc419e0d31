// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::{AppConfig, AppContext, SessionProperties, WriteFailurePolicy};
pub use app_dependencies::*;

mod app_context;
mod app_dependencies;
