//! MongoDB implementation of UniversityRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{UniversityError, UniversityResult};
use crate::models::{University, UniversityInput, next_updated_at, now_millis};
use crate::repository::UniversityRepository;

pub const COLLECTION_NAME: &str = "universities";

/// Stored shape: native ObjectId and BSON datetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UniversityDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    address: String,
    phone: String,
    email: String,
    #[serde(default)]
    website: Option<String>,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl UniversityDocument {
    fn new(input: UniversityInput, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: input.name,
            address: input.address,
            phone: input.phone,
            email: input.email,
            website: input.website,
            created_at: to_bson_datetime(now),
            updated_at: to_bson_datetime(now),
        }
    }

    fn into_university(self) -> UniversityResult<University> {
        let id = self
            .id
            .ok_or_else(|| UniversityError::Database("stored document has no _id".to_string()))?;

        Ok(University {
            id: id.to_hex(),
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: self.website,
            created_at: from_bson_datetime(self.created_at)?,
            updated_at: from_bson_datetime(self.updated_at)?,
        })
    }
}

fn to_bson_datetime(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

fn from_bson_datetime(at: bson::DateTime) -> UniversityResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).ok_or_else(|| {
        UniversityError::Database(format!(
            "stored timestamp {} ms is out of range",
            at.timestamp_millis()
        ))
    })
}

fn parse_id(id: &str) -> UniversityResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| UniversityError::InvalidId(id.to_string()))
}

/// MongoDB implementation of the UniversityRepository
pub struct MongoUniversityRepository {
    collection: Collection<UniversityDocument>,
}

impl MongoUniversityRepository {
    /// Use the `universities` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUniversityRepository::new(client.database("campus"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<UniversityDocument>(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl UniversityRepository for MongoUniversityRepository {
    #[instrument(skip(self, input), fields(university_name = %input.name))]
    async fn create(&self, input: UniversityInput) -> UniversityResult<University> {
        let mut document = UniversityDocument::new(input, now_millis());

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            UniversityError::Database(format!(
                "unexpected inserted id type: {}",
                result.inserted_id
            ))
        })?;
        document.id = Some(id);

        let university = document.into_university()?;
        tracing::info!(university_id = %university.id, "University stored");
        Ok(university)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> UniversityResult<University> {
        let oid = parse_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or(UniversityError::NotFound)?
            .into_university()
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> UniversityResult<Vec<University>> {
        let documents: Vec<UniversityDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;

        documents
            .into_iter()
            .map(UniversityDocument::into_university)
            .collect()
    }

    #[instrument(skip(self, university), fields(university_id = %university.id))]
    async fn update(&self, university: &University) -> UniversityResult<University> {
        let oid = parse_id(&university.id)?;
        let updated_at = next_updated_at(university.updated_at);

        let changes = doc! {
            "$set": {
                "name": university.name.as_str(),
                "address": university.address.as_str(),
                "phone": university.phone.as_str(),
                "email": university.email.as_str(),
                "website": university.website.clone(),
                "updated_at": to_bson_datetime(updated_at),
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, changes)
            .await?;
        if result.matched_count == 0 {
            return Err(UniversityError::NotFound);
        }

        tracing::info!("University stored");
        Ok(University {
            updated_at,
            ..university.clone()
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> UniversityResult<()> {
        let oid = parse_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(UniversityError::NotFound);
        }

        tracing::info!("University removed");
        Ok(())
    }
}
