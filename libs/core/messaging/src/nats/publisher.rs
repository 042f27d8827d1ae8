//! Fire-and-forget publisher bound to a single subject.

use async_nats::Client;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

use super::is_connected;
use crate::MessagingError;

/// Publishes JSON messages to one subject with a core-NATS publish.
///
/// There is no acknowledgement from a stream: a successful call means the message was
/// handed to the client while it held a live connection.
pub struct NatsPublisher {
    client: Client,
    subject: String,
    closed: AtomicBool,
}

impl NatsPublisher {
    pub fn new(client: Client, subject: impl Into<String>) -> Self {
        Self {
            client,
            subject: subject.into(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Serialize `payload` and publish it once.
    pub async fn publish_json<T: Serialize>(&self, payload: &T) -> Result<(), MessagingError> {
        let body = serde_json::to_vec(payload)?;
        self.publish_bytes(body).await
    }

    /// Publish a pre-encoded body once.
    pub async fn publish_bytes(&self, body: Vec<u8>) -> Result<(), MessagingError> {
        if self.is_closed() || !is_connected(&self.client) {
            return Err(MessagingError::NotConnected);
        }

        let size = body.len();
        self.client
            .publish(self.subject.clone(), body.into())
            .await
            .map_err(|e| MessagingError::Publish(e.to_string()))?;

        debug!(subject = %self.subject, size, "Published message");
        Ok(())
    }

    /// Flush buffered messages and release the connection. Only the first call does any work.
    ///
    /// The client handle is shared, so every clone of it stops working once this returns.
    pub async fn close(&self) -> Result<(), MessagingError> {
        if self
            .closed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(());
        }

        self.client
            .flush()
            .await
            .map_err(|e| MessagingError::Flush(e.to_string()))?;

        self.client
            .drain()
            .await
            .map_err(|e| MessagingError::Drain(e.to_string()))?;

        info!(subject = %self.subject, "Publisher closed");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use test_utils::TestNats;

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_publish_json_reaches_subscriber() {
        let nats = TestNats::new().await;
        let mut subscriber = nats.client().subscribe("campus.events").await.unwrap();

        let publisher = NatsPublisher::new(nats.client(), "campus.events");
        publisher
            .publish_json(&serde_json::json!({ "type": "created" }))
            .await
            .unwrap();

        let message = subscriber.next().await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&message.payload).unwrap();
        assert_eq!(value["type"], "created");

        publisher.close().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_publish_after_close_fails() {
        let nats = TestNats::new().await;
        let publisher = NatsPublisher::new(nats.client(), "campus.events");

        publisher.close().await.unwrap();

        let result = publisher
            .publish_json(&serde_json::json!({ "type": "deleted" }))
            .await;
        assert!(matches!(result, Err(MessagingError::NotConnected)));
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_close_is_idempotent() {
        let nats = TestNats::new().await;
        let publisher = NatsPublisher::new(nats.client(), "campus.events");

        publisher.close().await.unwrap();
        publisher.close().await.unwrap();
        assert!(publisher.is_closed());
    }
}
