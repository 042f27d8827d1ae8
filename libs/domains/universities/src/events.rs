//! Mutation announcements for other services.

use async_trait::async_trait;
use messaging::nats::{Client, NatsPublisher};
use tracing::instrument;

use crate::error::{UniversityError, UniversityResult};
use crate::models::{University, UniversityEvent, UniversityEventType};

/// Announces a committed mutation. One publish attempt per call, no retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniversityEventPublisher: Send + Sync {
    async fn publish(
        &self,
        event_type: UniversityEventType,
        university: &University,
    ) -> UniversityResult<()>;

    /// Flush and release the broker connection. Safe to call more than once.
    async fn close(&self) -> UniversityResult<()>;
}

/// Publishes `{type, entity}` JSON to a single NATS subject.
pub struct NatsUniversityEventPublisher {
    publisher: NatsPublisher,
}

impl NatsUniversityEventPublisher {
    pub fn new(client: Client, subject: impl Into<String>) -> Self {
        Self {
            publisher: NatsPublisher::new(client, subject),
        }
    }

    pub fn subject(&self) -> &str {
        self.publisher.subject()
    }

    /// Underlying client, for readiness checks
    pub fn client(&self) -> &Client {
        self.publisher.client()
    }
}

#[async_trait]
impl UniversityEventPublisher for NatsUniversityEventPublisher {
    #[instrument(skip(self, university), fields(university_id = %university.id))]
    async fn publish(
        &self,
        event_type: UniversityEventType,
        university: &University,
    ) -> UniversityResult<()> {
        let event = UniversityEvent::new(event_type, university.clone());

        self.publisher
            .publish_json(&event)
            .await
            .map_err(|e| UniversityError::Publish(e.to_string()))?;

        tracing::debug!(%event_type, subject = %self.subject(), "University event published");
        Ok(())
    }

    async fn close(&self) -> UniversityResult<()> {
        self.publisher
            .close()
            .await
            .map_err(|e| UniversityError::Publish(e.to_string()))
    }
}
