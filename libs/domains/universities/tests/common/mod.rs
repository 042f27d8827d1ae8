//! In-memory doubles for the repository and publisher traits.

use async_trait::async_trait;
use domain_universities::models::{next_updated_at, now_millis};
use domain_universities::{
    University, UniversityError, UniversityEvent, UniversityEventPublisher, UniversityEventType,
    UniversityInput, UniversityRepository, UniversityResult, UniversityService, handlers,
};
use ::mongodb::bson::oid::ObjectId;
use std::sync::{Arc, Mutex};

/// Keeps records in insertion order and mimics the MongoDB adapter's id handling.
#[derive(Default)]
pub struct InMemoryRepository {
    records: Mutex<Vec<University>>,
}

impl InMemoryRepository {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

fn check_id(id: &str) -> UniversityResult<()> {
    ObjectId::parse_str(id)
        .map(|_| ())
        .map_err(|_| UniversityError::InvalidId(id.to_string()))
}

#[async_trait]
impl UniversityRepository for InMemoryRepository {
    async fn create(&self, input: UniversityInput) -> UniversityResult<University> {
        let now = now_millis();
        let university = University {
            id: ObjectId::new().to_hex(),
            name: input.name,
            address: input.address,
            phone: input.phone,
            email: input.email,
            website: input.website,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().unwrap().push(university.clone());
        Ok(university)
    }

    async fn get_by_id(&self, id: &str) -> UniversityResult<University> {
        check_id(id)?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UniversityError::NotFound)
    }

    async fn get_all(&self) -> UniversityResult<Vec<University>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update(&self, university: &University) -> UniversityResult<University> {
        check_id(&university.id)?;
        let mut records = self.records.lock().unwrap();
        let stored = records
            .iter_mut()
            .find(|u| u.id == university.id)
            .ok_or(UniversityError::NotFound)?;

        let created_at = stored.created_at;
        *stored = University {
            created_at,
            updated_at: next_updated_at(university.updated_at),
            ..university.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> UniversityResult<()> {
        check_id(id)?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|u| u.id != id);
        if records.len() == before {
            return Err(UniversityError::NotFound);
        }
        Ok(())
    }
}

/// Records every event it is asked to publish.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<UniversityEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<UniversityEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl UniversityEventPublisher for RecordingPublisher {
    async fn publish(
        &self,
        event_type: UniversityEventType,
        university: &University,
    ) -> UniversityResult<()> {
        self.events
            .lock()
            .unwrap()
            .push(UniversityEvent::new(event_type, university.clone()));
        Ok(())
    }

    async fn close(&self) -> UniversityResult<()> {
        Ok(())
    }
}

/// Broker that is always down.
pub struct FailingPublisher;

#[async_trait]
impl UniversityEventPublisher for FailingPublisher {
    async fn publish(&self, _: UniversityEventType, _: &University) -> UniversityResult<()> {
        Err(UniversityError::Publish(
            "not connected to the message broker".to_string(),
        ))
    }

    async fn close(&self) -> UniversityResult<()> {
        Ok(())
    }
}

pub struct TestApp {
    pub repository: Arc<InMemoryRepository>,
    pub publisher: Arc<RecordingPublisher>,
    pub router: axum::Router,
}

pub fn test_app() -> TestApp {
    let repository = Arc::new(InMemoryRepository::default());
    let publisher = Arc::new(RecordingPublisher::default());
    let service = UniversityService::from_shared(repository.clone(), publisher.clone());

    TestApp {
        repository,
        publisher,
        router: handlers::router(service),
    }
}
