//! Broker connectivity for services that announce changes to other services.
//!
//! The publishing model is deliberately thin: one core-NATS publish per call on a
//! single subject, no JetStream acknowledgement, no buffering beyond the client's
//! write buffer and no retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use messaging::nats::{NatsConfig, NatsPublisher, connect};
//!
//! let config = NatsConfig::new(["nats://localhost:4222"]);
//! let client = connect(&config).await?;
//! let publisher = NatsPublisher::new(client, "universities.events");
//!
//! publisher.publish_json(&serde_json::json!({ "type": "created" })).await?;
//! publisher.close().await?;
//! ```

mod error;
pub mod nats;

pub use error::MessagingError;
