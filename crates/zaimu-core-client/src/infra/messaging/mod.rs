// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_messages_repository::InMemoryMessagesRepository;
pub use in_memory_typing_indicators_repository::InMemoryTypingIndicatorsRepository;

mod in_memory_messages_repository;
mod in_memory_typing_indicators_repository;
