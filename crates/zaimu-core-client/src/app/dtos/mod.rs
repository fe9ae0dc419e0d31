// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::messaging::models::{
    DeliveryState, Message, MessageId, MessageServerId, TypingIndicator,
};
pub use crate::domain::rooms::models::{JoinOutcome, MemberInfo, Room, RoomState};
pub use crate::domain::shared::models::{ChannelId, RoomId, RoomKind, TaskId, UserId};
pub use crate::domain::tasks::models::{
    FilterName, FilterPredicate, FilterPreferences, SavedFilter, Task, TaskStatusKind,
};
pub use zaimu_realtime::ConnectionState;
