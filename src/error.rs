use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not permitted: {0}")]
    Authorization(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            // Internal detail goes to the log only, never to the client.
            AppError::Database(e) => {
                tracing::error!("database error: {}", e);
                Status::internal("Internal server error")
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                Status::internal("Internal server error")
            }
            AppError::Validation(msg) => Status::invalid_argument(msg),
            AppError::NotFound(msg) => Status::not_found(msg),
            AppError::Authentication(msg) => Status::unauthenticated(msg),
            AppError::Authorization(msg) => Status::permission_denied(msg),
            AppError::Conflict(msg) => Status::already_exists(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
