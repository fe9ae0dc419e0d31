// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;
use uuid::Uuid;

pub trait IdProvider: Send + Sync {
    fn new_id(&self) -> String;
}

pub struct UuidProvider {}

impl UuidProvider {
    pub fn new() -> Self {
        UuidProvider {}
    }
}

impl IdProvider for UuidProvider {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl IdProvider for Arc<dyn IdProvider> {
    fn new_id(&self) -> String {
        self.deref().new_id()
    }
}
