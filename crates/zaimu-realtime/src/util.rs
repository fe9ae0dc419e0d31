// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Not connected")]
    NotConnected,
    #[error(transparent)]
    Generic(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Request Timeout")]
    TimedOut,
    #[error("Not connected")]
    Disconnected,
    #[error("Request rejected: {message}")]
    Rejected { message: String },
    #[error("Request error: {msg}")]
    Generic { msg: String },
}

impl From<EmitError> for RequestError {
    fn from(value: EmitError) -> Self {
        match value {
            EmitError::NotConnected => RequestError::Disconnected,
            EmitError::Generic(err) => RequestError::Generic {
                msg: err.to_string(),
            },
        }
    }
}
