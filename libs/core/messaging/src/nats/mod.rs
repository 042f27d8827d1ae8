//! NATS connection management and publishing

mod config;
mod connector;
mod health;
mod publisher;

pub use config::NatsConfig;
pub use connector::connect;
pub use health::is_connected;
pub use publisher::NatsPublisher;

pub use async_nats::Client;
