use actix_web::{HttpResponse, http::StatusCode};
use lemon::LemonError;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JWT error: {0}")]
    JWT(#[from] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Lemon(#[from] LemonError),

    // === APPLICATION ERRORS ===
    #[error("Authorization error: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_)
            | AppError::JWT(_)
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Lemon(error) if error.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Lemon(_) => StatusCode::BAD_GATEWAY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        let is_dev = cfg!(debug_assertions);

        let to_internal_json = |err_msg: &str| {
            if is_dev {
                serde_json::json!({ "error": err_msg })
            } else {
                serde_json::json!({ "error": "Internal server error" })
            }
        };

        let body = match self {
            // === CONVERSION ERRORS ===
            AppError::Database(error) => {
                log::error!("Database error: {}", error);
                to_internal_json(&error.to_string())
            }
            AppError::JWT(error) => {
                log::error!("JWT error: {}", error);
                to_internal_json(&error.to_string())
            }
            AppError::Lemon(error) => {
                log::error!("Lemon Squeezy error: {}", error);
                to_internal_json(&error.to_string())
            }
            AppError::Config(error) => {
                log::error!("Configuration error: {}", error);
                to_internal_json(&self.to_string())
            }
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                to_internal_json(error)
            }

            // === APPLICATION ERRORS ===
            AppError::Unauthorized(_)
            | AppError::Forbidden(_)
            | AppError::NotFound(_)
            | AppError::BadRequest(_) => serde_json::json!({ "error": self.to_string() }),
        };

        HttpResponse::build(self.status()).json(body)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}
