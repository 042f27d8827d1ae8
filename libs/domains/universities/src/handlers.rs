use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UniversityResult;
use crate::events::UniversityEventPublisher;
use crate::models::{Envelope, University, UniversityEvent, UniversityEventType, UniversityInput};
use crate::repository::UniversityRepository;
use crate::service::UniversityService;

pub const CREATED_MESSAGE: &str = "University created successfully";
pub const UPDATED_MESSAGE: &str = "University updated successfully";
pub const DELETED_MESSAGE: &str = "University deleted successfully";
pub const LISTED_MESSAGE: &str = "Universities retrieved successfully";

/// OpenAPI documentation for the Universities API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_universities,
        create_university,
        get_university,
        update_university,
        delete_university,
    ),
    components(schemas(
        University,
        UniversityInput,
        UniversityEvent,
        UniversityEventType,
        ErrorResponse
    )),
    tags(
        (name = "Universities", description = "University records (MongoDB) with change events (NATS)")
    )
)]
pub struct ApiDoc;

type SharedService<R, P> = State<Arc<UniversityService<R, P>>>;

/// Create the universities router with all HTTP endpoints
pub fn router<R, P>(service: UniversityService<R, P>) -> Router
where
    R: UniversityRepository + 'static,
    P: UniversityEventPublisher + 'static,
{
    Router::new()
        .route("/", get(list_universities).post(create_university))
        .route(
            "/{id}",
            get(get_university)
                .put(update_university)
                .delete(delete_university),
        )
        .with_state(Arc::new(service))
}

/// List every university
#[utoipa::path(
    get,
    path = "",
    tag = "Universities",
    responses(
        (status = 200, description = "All stored universities", body = Envelope<Vec<University>>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_universities<R: UniversityRepository, P: UniversityEventPublisher>(
    State(service): SharedService<R, P>,
) -> UniversityResult<Json<Envelope<Vec<University>>>> {
    let universities = service.list_universities().await?;
    Ok(Json(Envelope::with_data(
        StatusCode::OK.as_u16(),
        LISTED_MESSAGE,
        universities,
    )))
}

/// Create a university and announce it
#[utoipa::path(
    post,
    path = "",
    tag = "Universities",
    request_body = UniversityInput,
    responses(
        (status = 201, description = "University created", body = Envelope<University>),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Store or publish failure", body = ErrorResponse)
    )
)]
async fn create_university<R: UniversityRepository, P: UniversityEventPublisher>(
    State(service): SharedService<R, P>,
    ValidatedJson(input): ValidatedJson<UniversityInput>,
) -> UniversityResult<impl IntoResponse> {
    let university = service.create_university(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(
            StatusCode::CREATED.as_u16(),
            CREATED_MESSAGE,
            university,
        )),
    ))
}

/// Get a university by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Universities",
    params(
        ("id" = String, Path, description = "University id (24-character hex)")
    ),
    responses(
        (status = 200, description = "University found", body = University),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "University not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_university<R: UniversityRepository, P: UniversityEventPublisher>(
    State(service): SharedService<R, P>,
    Path(id): Path<String>,
) -> UniversityResult<Json<University>> {
    let university = service.get_university(&id).await?;
    Ok(Json(university))
}

/// Replace a university's fields and announce the change
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Universities",
    params(
        ("id" = String, Path, description = "University id (24-character hex)")
    ),
    request_body = UniversityInput,
    responses(
        (status = 200, description = "University updated", body = Envelope<University>),
        (status = 400, description = "Invalid input or malformed id", body = ErrorResponse),
        (status = 404, description = "University not found", body = ErrorResponse),
        (status = 500, description = "Store or publish failure", body = ErrorResponse)
    )
)]
async fn update_university<R: UniversityRepository, P: UniversityEventPublisher>(
    State(service): SharedService<R, P>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UniversityInput>,
) -> UniversityResult<Json<Envelope<University>>> {
    let university = service.update_university(&id, input).await?;
    Ok(Json(Envelope::with_data(
        StatusCode::OK.as_u16(),
        UPDATED_MESSAGE,
        university,
    )))
}

/// Delete a university and announce the removal
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Universities",
    params(
        ("id" = String, Path, description = "University id (24-character hex)")
    ),
    responses(
        (status = 200, description = "University deleted", body = Envelope<University>),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "University not found", body = ErrorResponse),
        (status = 500, description = "Store or publish failure", body = ErrorResponse)
    )
)]
async fn delete_university<R: UniversityRepository, P: UniversityEventPublisher>(
    State(service): SharedService<R, P>,
    Path(id): Path<String>,
) -> UniversityResult<Json<Envelope<University>>> {
    service.delete_university(&id).await?;
    Ok(Json(Envelope::message_only(
        StatusCode::OK.as_u16(),
        DELETED_MESSAGE,
    )))
}
