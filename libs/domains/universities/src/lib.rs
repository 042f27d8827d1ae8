//! Universities Domain
//!
//! CRUD over University records kept in MongoDB, with a `{type, entity}` event
//! published to NATS after every successful mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validate → existence check → mutate → publish
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼──────────┐
//! │ Repo │ │ Publisher  │  ← traits + MongoDB / NATS implementations
//! └──┬───┘ └────────────┘
//!    │
//! ┌──▼──────────┐
//! │   Models    │  ← University, input, envelope, event
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_universities::{
//!     handlers, MongoUniversityRepository, NatsUniversityEventPublisher, UniversityService,
//! };
//!
//! let repository = MongoUniversityRepository::new(mongo_client.database("campus"));
//! let publisher = NatsUniversityEventPublisher::new(nats_client, "universities.events");
//! let service = UniversityService::new(repository, publisher);
//!
//! let router = axum::Router::new().nest("/universities", handlers::router(service));
//! ```

pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{UniversityError, UniversityResult};
pub use events::{NatsUniversityEventPublisher, UniversityEventPublisher};
pub use handlers::ApiDoc;
pub use models::{Envelope, University, UniversityEvent, UniversityEventType, UniversityInput};
pub use mongodb::MongoUniversityRepository;
pub use repository::UniversityRepository;
pub use service::UniversityService;
