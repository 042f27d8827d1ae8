use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Body text returned for any broker failure; the broker's own error is only logged.
pub const PUBLISH_FAILED_MESSAGE: &str = "failed to publish event";

#[derive(Debug, Error)]
pub enum UniversityError {
    /// One or more input rules failed; the text lists every violation
    #[error("{0}")]
    Validation(String),

    #[error("invalid university id: {0}")]
    InvalidId(String),

    #[error("university not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),

    /// The mutation is already committed when this is returned
    #[error("failed to publish event: {0}")]
    Publish(String),
}

pub type UniversityResult<T> = Result<T, UniversityError>;

impl From<UniversityError> for AppError {
    fn from(err: UniversityError) -> Self {
        match err {
            UniversityError::Validation(msg) => AppError::BadRequest(msg),
            err @ UniversityError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            err @ UniversityError::NotFound => AppError::NotFound(err.to_string()),
            UniversityError::Database(msg) => AppError::InternalServerError(msg),
            UniversityError::Publish(details) => {
                tracing::error!(error = %details, "Event publish failed after commit");
                AppError::InternalServerError(PUBLISH_FAILED_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for UniversityError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for UniversityError {
    fn from(err: mongodb::error::Error) -> Self {
        UniversityError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: UniversityError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(UniversityError::Validation("name: must not be empty".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(UniversityError::InvalidId("xyz".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(UniversityError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(UniversityError::Database("timeout".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(UniversityError::Publish("no responders".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_publish_error_hides_broker_details() {
        let app_error = AppError::from(UniversityError::Publish("connection reset".into()));
        assert!(matches!(
            app_error,
            AppError::InternalServerError(ref msg) if msg == PUBLISH_FAILED_MESSAGE
        ));
    }
}
