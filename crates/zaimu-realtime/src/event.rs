// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::connector::ConnectionError;
use crate::packet::Packet;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A connection was established, either initially or after a reconnect.
    Connected,
    /// The connection dropped. The client keeps retrying on its own unless
    /// the disconnect was requested.
    Disconnected { error: Option<ConnectionError> },
    /// A reconnection attempt is scheduled. `attempt` starts at 1.
    Reconnecting { attempt: u32 },
    /// The retry budget is exhausted. No further attempts are made until
    /// the next explicit `connect` call.
    ConnectionFailed { error: ConnectionError },
    /// A non-ack packet arrived from the server.
    Packet(Packet),
}
