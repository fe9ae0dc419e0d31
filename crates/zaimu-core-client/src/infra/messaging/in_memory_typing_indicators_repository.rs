// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::messaging::models::TypingIndicator;
use crate::domain::messaging::repos::{TypingEpoch, TypingIndicatorsRepository};
use crate::domain::shared::models::{RoomId, UserId};

#[derive(Default)]
pub struct InMemoryTypingIndicatorsRepository {
    indicators: RwLock<HashMap<(RoomId, UserId), (TypingIndicator, TypingEpoch)>>,
    next_epoch: AtomicU64,
}

impl InMemoryTypingIndicatorsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypingIndicatorsRepository for InMemoryTypingIndicatorsRepository {
    fn insert(&self, indicator: TypingIndicator) -> TypingEpoch {
        let epoch = self.next_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.indicators.write().insert(
            (indicator.room_id.clone(), indicator.user_id),
            (indicator, epoch),
        );
        epoch
    }

    fn remove(&self, room_id: &RoomId, user_id: &UserId) -> bool {
        self.indicators
            .write()
            .remove(&(room_id.clone(), *user_id))
            .is_some()
    }

    fn remove_expired(&self, room_id: &RoomId, user_id: &UserId, epoch: TypingEpoch) -> bool {
        let mut indicators = self.indicators.write();
        let key = (room_id.clone(), *user_id);
        match indicators.get(&key) {
            Some((_, current)) if *current == epoch => {
                indicators.remove(&key);
                true
            }
            _ => false,
        }
    }

    fn get_all(&self, room_id: &RoomId) -> Vec<UserId> {
        let indicators = self.indicators.read();
        let mut entries = indicators
            .values()
            .filter(|(indicator, _)| indicator.room_id == *room_id)
            .collect::<Vec<_>>();
        entries.sort_by_key(|(indicator, _)| indicator.started_at);
        entries
            .into_iter()
            .map(|(indicator, _)| indicator.user_id)
            .collect()
    }

    fn clear(&self, room_id: &RoomId) {
        self.indicators
            .write()
            .retain(|(room, _), _| room != room_id);
    }

    fn clear_all(&self) {
        self.indicators.write().clear();
    }
}
