//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestNats`: NATS container with automatic cleanup (feature: "nats")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//!
//! # Usage
//!
//! Add the features you need to your dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo", "nats"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::{TestMongo, TestNats};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_container_test() {
//!     let mongo = TestMongo::new().await;
//!     let nats = TestNats::new().await;
//!
//!     let db = mongo.database("campus");
//!     let client = nats.client();
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "nats")]
mod nats;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

#[cfg(feature = "nats")]
pub use nats::TestNats;

/// Builder for test data with deterministic randomization
///
/// Values derive from a seed so reruns of the same test produce the same data,
/// while different tests sharing one container do not collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_university");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name, e.g. `test-university-12345-main`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a well-formed, unique email address
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.edu", local, self.seed)
    }

    /// Database name scoped to this builder, safe to drop after the test
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }
}
