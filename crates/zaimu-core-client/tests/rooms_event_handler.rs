// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;

use zaimu_core_client::app::event_handlers::{
    PresenceEvent, PresenceKind, RoomsEventHandler, ServerEvent, ServerEventHandler,
};
use zaimu_core_client::domain::rooms::models::{MemberInfo, Room, RoomState};
use zaimu_core_client::domain::shared::models::{ChannelId, RoomId, UserId};
use zaimu_core_client::test::{mock_data, MockAppDependencies};
use zaimu_core_client::{ClientEvent, ClientRoomEventType, Notification};

fn joined_channel() -> Room {
    Room {
        id: RoomId::Channel(ChannelId::from(1)),
        state: RoomState::Joined { listen_only: false },
        members: vec![],
    }
}

fn presence(kind: PresenceKind, user_id: u64) -> ServerEvent {
    ServerEvent::Presence(PresenceEvent {
        kind,
        room_id: RoomId::Channel(ChannelId::from(1)),
        user_id: UserId::from(user_id),
        user_name: "Aya".to_string(),
    })
}

#[tokio::test]
async fn test_adds_member_and_posts_notification() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(joined_channel()));
    deps.connected_rooms_repo
        .expect_add_member()
        .once()
        .with(
            predicate::eq(RoomId::Channel(ChannelId::from(1))),
            predicate::eq(MemberInfo {
                id: UserId::from(7),
                name: "Aya".to_string(),
            }),
        )
        .return_const(true);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::RoomChanged {
            room_id: RoomId::Channel(ChannelId::from(1)),
            r#type: ClientRoomEventType::ParticipantsChanged,
        }))
        .return_const(());
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::NotificationPosted {
            notification: Notification::info("Aya joined"),
        }))
        .return_const(());

    let handler = RoomsEventHandler::from(&deps.into_deps());
    handler
        .handle_event(presence(PresenceKind::Joined, 7))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_removes_member_without_notification() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(joined_channel()));
    deps.connected_rooms_repo
        .expect_remove_member()
        .once()
        .with(
            predicate::eq(RoomId::Channel(ChannelId::from(1))),
            predicate::eq(UserId::from(7)),
        )
        .return_const(true);

    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::RoomChanged {
            room_id: RoomId::Channel(ChannelId::from(1)),
            r#type: ClientRoomEventType::ParticipantsChanged,
        }))
        .return_const(());

    let handler = RoomsEventHandler::from(&deps.into_deps());
    handler.handle_event(presence(PresenceKind::Left, 7)).await?;

    Ok(())
}

#[tokio::test]
async fn test_ignores_own_presence() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(joined_channel()));

    let handler = RoomsEventHandler::from(&deps.into_deps());
    handler
        .handle_event(presence(
            PresenceKind::Joined,
            mock_data::user_id().into_inner(),
        ))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_ignores_presence_for_inactive_room() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(Room {
            id: RoomId::Channel(ChannelId::from(2)),
            state: RoomState::Joined { listen_only: false },
            members: vec![],
        }));

    let handler = RoomsEventHandler::from(&deps.into_deps());
    handler
        .handle_event(presence(PresenceKind::Joined, 7))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_known_member_does_not_notify_twice() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.connected_rooms_repo
        .expect_get()
        .return_const(Some(joined_channel()));
    deps.connected_rooms_repo
        .expect_add_member()
        .return_const(false);

    let handler = RoomsEventHandler::from(&deps.into_deps());
    handler
        .handle_event(presence(PresenceKind::Joined, 7))
        .await?;

    Ok(())
}
