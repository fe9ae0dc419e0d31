// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use secrecy::Secret;
use serde_json::json;
use url::Url;

use zaimu_realtime::test::{Connection, Connector};
use zaimu_realtime::{
    Ack, Client, ConnectionError, ConnectionState, EmitError, Event, EventName, Packet,
    ReconnectStrategy, RequestError,
};

struct TestClient {
    client: Client,
    connection: Arc<Connection>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl TestClient {
    fn new(strategy: ReconnectStrategy) -> Self {
        let connection = Arc::new(Connection::default());
        let events = Arc::new(Mutex::new(Vec::new()));

        let handler_events = events.clone();
        let client = Client::builder()
            .set_connector_provider(Connector::provider(connection.clone()))
            .set_reconnect_strategy(strategy)
            .set_event_handler(move |_, event| {
                let events = handler_events.clone();
                async move {
                    events.lock().push(event);
                }
            })
            .build();

        TestClient {
            client,
            connection,
            events,
        }
    }

    async fn connect(&self) -> Result<(), ConnectionError> {
        self.client
            .connect(
                &Url::parse("wss://app.zaimu.jp").unwrap(),
                Secret::new("token".to_string()),
            )
            .await
    }

    async fn settle(&self) {
        // Paused time auto-advances past pending sleeps once tasks idle.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}

#[tokio::test(start_paused = true)]
async fn test_connects_and_reports_state() {
    let test = TestClient::new(ReconnectStrategy::default());
    assert_eq!(test.client.state(), ConnectionState::Disconnected);

    test.connect().await.unwrap();
    test.settle().await;

    assert_eq!(test.client.state(), ConnectionState::Connected);
    assert_eq!(test.events(), vec![Event::Connected]);
    assert_eq!(test.connection.connect_attempts(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_connect_is_idempotent() {
    let test = TestClient::new(ReconnectStrategy::default());

    test.connect().await.unwrap();
    test.connect().await.unwrap();
    test.settle().await;

    assert_eq!(test.client.state(), ConnectionState::Connected);
    assert_eq!(test.connection.connect_attempts(), 2);

    test.client
        .emit(EventName::TypingIndicator, json!({ "channel_id": 1 }))
        .unwrap();
    assert_eq!(test.connection.sent_packets().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_emit_requires_connection() {
    let test = TestClient::new(ReconnectStrategy::default());

    let result = test
        .client
        .emit(EventName::TypingIndicator, json!({ "channel_id": 1 }));
    assert!(matches!(result, Err(EmitError::NotConnected)));
}

#[tokio::test(start_paused = true)]
async fn test_request_resolves_with_matching_ack() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();

    test.connection.set_packet_handler(|packet| {
        let mut ack = Ack::success();
        ack.data.insert("message_id".to_string(), json!(42));
        Connection::ack(packet, ack).into_iter().collect()
    });

    let ack = test
        .client
        .request(EventName::ChatMessage, json!({ "content": "hello" }))
        .await
        .unwrap();

    assert!(ack.is_success());
    assert_eq!(ack.data.get("message_id"), Some(&json!(42)));
}

#[tokio::test(start_paused = true)]
async fn test_request_surfaces_rejection_message() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();

    test.connection.set_packet_handler(|packet| {
        Connection::ack(packet, Ack::failure("not a member"))
            .into_iter()
            .collect()
    });

    let result = test
        .client
        .request(EventName::JoinChannel, json!({ "channel_id": 5 }))
        .await;

    match result {
        Err(RequestError::Rejected { message }) => assert_eq!(message, "not a member"),
        other => panic!("Unexpected result {:?}", other.map(|_| ())),
    }
}

#[tokio::test(start_paused = true)]
async fn test_request_times_out_without_ack() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();

    let result = test
        .client
        .request(EventName::JoinChannel, json!({ "channel_id": 5 }))
        .await;

    assert!(matches!(result, Err(RequestError::TimedOut)));
}

#[tokio::test(start_paused = true)]
async fn test_reconnects_after_connection_loss() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();
    test.settle().await;

    test.connection.fail_connection(Some(ConnectionError::Generic {
        msg: "boom".to_string(),
    }));
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(test.client.state(), ConnectionState::Connected);
    assert_eq!(test.connection.connect_attempts(), 2);
    assert_eq!(
        test.events(),
        vec![
            Event::Connected,
            Event::Disconnected {
                error: Some(ConnectionError::Generic {
                    msg: "boom".to_string()
                })
            },
            Event::Reconnecting { attempt: 1 },
            Event::Connected,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_once_retry_budget_is_exhausted() {
    let strategy = ReconnectStrategy {
        max_attempts: 2,
        ..Default::default()
    };
    let test = TestClient::new(strategy);

    for _ in 0..3 {
        test.connection
            .push_connect_failure(ConnectionError::TimedOut);
    }

    assert_eq!(test.connect().await, Err(ConnectionError::TimedOut));
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(test.client.state(), ConnectionState::Failed);
    assert_eq!(test.connection.connect_attempts(), 3);
    assert_eq!(
        test.events(),
        vec![
            Event::Reconnecting { attempt: 1 },
            Event::Reconnecting { attempt: 2 },
            Event::ConnectionFailed {
                error: ConnectionError::TimedOut
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_reconnect_revives_a_failed_client() {
    let strategy = ReconnectStrategy {
        max_attempts: 1,
        ..Default::default()
    };
    let test = TestClient::new(strategy);

    for _ in 0..2 {
        test.connection
            .push_connect_failure(ConnectionError::TimedOut);
    }

    assert_eq!(test.connect().await, Err(ConnectionError::TimedOut));
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(test.client.state(), ConnectionState::Failed);

    test.client.reconnect();
    test.settle().await;

    assert_eq!(test.client.state(), ConnectionState::Connected);
    assert_eq!(test.connection.connect_attempts(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_reconnect_is_a_no_op_after_clean_disconnect() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();
    test.settle().await;

    test.client.disconnect();
    test.client.reconnect();
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(test.client.state(), ConnectionState::Disconnected);
    assert_eq!(test.connection.connect_attempts(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clean_disconnect_stops_reconnection() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();
    test.settle().await;

    test.client.disconnect();
    tokio::time::sleep(Duration::from_secs(60)).await;

    assert_eq!(test.client.state(), ConnectionState::Disconnected);
    assert_eq!(test.connection.connect_attempts(), 1);
    assert_eq!(test.events(), vec![Event::Connected]);
}

#[tokio::test(start_paused = true)]
async fn test_wait_until_connected_honors_timeout() {
    let test = TestClient::new(ReconnectStrategy::default());

    assert!(
        !test
            .client
            .wait_until_connected(Duration::from_millis(100))
            .await
    );

    test.connect().await.unwrap();
    assert!(
        test.client
            .wait_until_connected(Duration::from_millis(100))
            .await
    );
}

#[tokio::test(start_paused = true)]
async fn test_forwards_server_packets() {
    let test = TestClient::new(ReconnectStrategy::default());
    test.connect().await.unwrap();
    test.settle().await;

    let packet = Packet::new(
        EventName::ChatMessage,
        json!({ "channel_id": 1, "content": "hello" }),
    );
    test.connection.receive_packet(packet.clone());
    test.settle().await;

    assert_eq!(
        test.events(),
        vec![Event::Connected, Event::Packet(packet)]
    );
}
