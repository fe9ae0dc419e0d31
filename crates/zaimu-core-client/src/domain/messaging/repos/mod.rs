// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messages_repository::MessagesRepository;
pub use typing_indicators_repository::{TypingEpoch, TypingIndicatorsRepository};
#[cfg(feature = "test")]
pub use messages_repository::MockMessagesRepository;
#[cfg(feature = "test")]
pub use typing_indicators_repository::MockTypingIndicatorsRepository;

mod messages_repository;
mod typing_indicators_repository;
