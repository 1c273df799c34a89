use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Body sent to clients for every rejected field, regardless of which
/// rule tripped. The individual messages only go to the log.
const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unprocessable entity: {}", .0.join("; "))]
    Unprocessable(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let error_message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::NotFound(ref e) => e.clone(),
            AppError::BadRequest(ref e) => e.clone(),
            AppError::Validation(ref messages) | AppError::Unprocessable(ref messages) => {
                tracing::debug!(status = %status, ?messages, "Rejected invalid input");
                return HttpResponse::build(status).json(ValidationErrorResponse {
                    errors: vec![VALIDATION_ERRORS.to_string()],
                });
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                e.clone()
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_message,
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Flatten `validator` output into human-readable messages, sorted by field
/// so log lines are stable.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match err.message {
                Some(ref message) => message.to_string(),
                None => format!("{}: {}", field, err.code),
            })
        })
        .collect()
}
