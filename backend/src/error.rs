use actix_web::http::StatusCode;
use actix_web::ResponseError;
use common::model::collection::UnknownCollection;
use thiserror::Error;

/// Failures of the document store, the blob store and the HTTP layer above them.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("stored record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    UnknownCollection(#[from] UnknownCollection),
    #[error("record not found")]
    NotFound,
    #[error("records must be JSON objects")]
    InvalidRecord,
    #[error("file exceeds the 5MB upload limit")]
    PayloadTooLarge,
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
    #[error("malformed multipart body: {0}")]
    Multipart(String),
    #[error("document store is unavailable")]
    Unavailable,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::UnknownCollection(_) | GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::InvalidRecord
            | GatewayError::InvalidUpload(_)
            | GatewayError::Multipart(_) => StatusCode::BAD_REQUEST,
            GatewayError::Database(_)
            | GatewayError::Json(_)
            | GatewayError::Io(_)
            | GatewayError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            GatewayError::from(UnknownCollection("users".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(GatewayError::PayloadTooLarge.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            GatewayError::InvalidUpload("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GatewayError::Unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
