//! University Service - validation, persistence and event emission

use axum_helpers::validation_message;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UniversityError, UniversityResult};
use crate::events::UniversityEventPublisher;
use crate::models::{University, UniversityEventType, UniversityInput};
use crate::repository::UniversityRepository;

/// Runs every request as validate → existence check → mutate → publish.
///
/// The repository and publisher are injected and shared; the service adds no locking
/// of its own. A publish failure is reported after the mutation has been committed
/// and nothing is rolled back.
pub struct UniversityService<R: UniversityRepository, P: UniversityEventPublisher> {
    repository: Arc<R>,
    publisher: Arc<P>,
}

impl<R: UniversityRepository, P: UniversityEventPublisher> UniversityService<R, P> {
    pub fn new(repository: R, publisher: P) -> Self {
        Self::from_shared(Arc::new(repository), Arc::new(publisher))
    }

    /// Build from handles that are also held elsewhere, e.g. by shutdown cleanup.
    pub fn from_shared(repository: Arc<R>, publisher: Arc<P>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    #[instrument(skip(self, input), fields(university_name = %input.name))]
    pub async fn create_university(&self, input: UniversityInput) -> UniversityResult<University> {
        validate(&input)?;

        let university = self.repository.create(input).await?;
        self.publisher
            .publish(UniversityEventType::Created, &university)
            .await?;

        tracing::info!(university_id = %university.id, "University created");
        Ok(university)
    }

    #[instrument(skip(self))]
    pub async fn get_university(&self, id: &str) -> UniversityResult<University> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_universities(&self) -> UniversityResult<Vec<University>> {
        self.repository.get_all().await
    }

    /// Replace the mutable fields of `id`. The stored id and `created_at` win over
    /// anything the caller sends.
    #[instrument(skip(self, input))]
    pub async fn update_university(
        &self,
        id: &str,
        input: UniversityInput,
    ) -> UniversityResult<University> {
        validate(&input)?;

        let mut university = self.repository.get_by_id(id).await?;
        university.apply(input);

        let updated = self.repository.update(&university).await?;
        self.publisher
            .publish(UniversityEventType::Updated, &updated)
            .await?;

        tracing::info!(university_id = %updated.id, "University updated");
        Ok(updated)
    }

    /// Remove `id` and announce the record as it was before deletion.
    #[instrument(skip(self))]
    pub async fn delete_university(&self, id: &str) -> UniversityResult<University> {
        let existing = self.repository.get_by_id(id).await?;

        self.repository.delete(&existing.id).await?;
        self.publisher
            .publish(UniversityEventType::Deleted, &existing)
            .await?;

        tracing::info!(university_id = %existing.id, "University deleted");
        Ok(existing)
    }
}

impl<R: UniversityRepository, P: UniversityEventPublisher> Clone for UniversityService<R, P> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            publisher: Arc::clone(&self.publisher),
        }
    }
}

/// Same rules and message format as the `ValidatedJson` extractor.
fn validate(input: &UniversityInput) -> UniversityResult<()> {
    input.validate().map_err(|errors| {
        tracing::warn!(fields = errors.field_errors().len(), "University input rejected");
        UniversityError::Validation(validation_message(&errors))
    })
}
