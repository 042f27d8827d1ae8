//! Error types for broker operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessagingError {
    /// A configured server address could not be parsed
    #[error("invalid server address '{address}': {details}")]
    InvalidServerAddress { address: String, details: String },

    #[error("NATS connection error: {0}")]
    Connection(#[from] async_nats::ConnectError),

    /// The client has lost its connection to every server, or the publisher was closed
    #[error("not connected to the message broker")]
    NotConnected,

    #[error("publish error: {0}")]
    Publish(String),

    #[error("flush error: {0}")]
    Flush(String),

    #[error("drain error: {0}")]
    Drain(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
