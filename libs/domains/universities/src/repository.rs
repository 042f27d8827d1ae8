use async_trait::async_trait;

use crate::error::UniversityResult;
use crate::models::{University, UniversityInput};

/// Persistence for University records.
///
/// Implementations assign the identifier and both timestamps on create and
/// refresh `updated_at` on update. Callers validate input beforehand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Persist a new record and return it with its assigned id and timestamps
    async fn create(&self, input: UniversityInput) -> UniversityResult<University>;

    /// Fails with `NotFound` when absent and `InvalidId` when `id` is malformed
    async fn get_by_id(&self, id: &str) -> UniversityResult<University>;

    /// Every stored record, in the store's natural order
    async fn get_all(&self) -> UniversityResult<Vec<University>>;

    /// Overwrite the mutable fields of `university.id`; `created_at` is never rewritten
    async fn update(&self, university: &University) -> UniversityResult<University>;

    async fn delete(&self, id: &str) -> UniversityResult<()>;
}
