use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

/// University record as exposed over HTTP and carried in events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct University {
    /// Store-assigned identifier (24-character hex)
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Set once on creation
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

impl University {
    /// Overwrite every mutable field with `input`, leaving identity and timestamps alone.
    pub fn apply(&mut self, input: UniversityInput) {
        self.name = input.name;
        self.address = input.address;
        self.phone = input.phone;
        self.email = input.email;
        self.website = input.website;
    }
}

/// Request body for create and update.
///
/// Only the mutable fields are read; `id` and timestamps in the body are ignored.
/// Missing required fields decode as empty strings and fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UniversityInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Example University")]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: String,
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    #[schema(example = "admissions@example.edu")]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
}

/// Uniform wrapper for list and mutation responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn with_data(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn message_only(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}

/// Kind of mutation announced on the broker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UniversityEventType {
    Created,
    Updated,
    Deleted,
}

/// Broker message: `{"type": "...", "entity": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UniversityEvent {
    #[serde(rename = "type")]
    pub event_type: UniversityEventType,
    pub entity: University,
}

impl UniversityEvent {
    pub fn new(event_type: UniversityEventType, entity: University) -> Self {
        Self { event_type, entity }
    }
}

/// Current time at the store's millisecond precision.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Timestamp for an update of a record last touched at `previous`.
///
/// Always at least 1 ms after `previous`, so `updated_at` strictly increases even
/// when two writes land within the same millisecond.
pub fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    now_millis().max(previous + TimeDelta::milliseconds(1))
}
