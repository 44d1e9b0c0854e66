use actix_web::{ResponseError, web};
use std::collections::HashMap;
use utoipa::ToSchema;

pub mod app;
pub mod config;
pub mod host;
pub mod models;
pub mod routes;

pub type Store = web::Data<shashin_storage::ScreenshotStore>;
pub type Engine = web::Data<shashin_capture::manager::EngineManager>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("storage error: {0:?}")]
    Storage(#[from] shashin_storage::Error),

    #[error("capture error: {0:?}")]
    Capture(#[from] shashin_capture::Error),

    #[error("config error: {0:?}")]
    Config(#[from] ::config::ConfigError),

    #[error("unknown json error: {0:?}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0:?}")]
    IoError(#[from] std::io::Error),

    #[error("validation errors found")]
    ValidationErrors(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(serde::Serialize, serde::Deserialize, ToSchema, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum PublicErrorType {
    InternalServerError,

    NotFound,
    InvalidFileName,

    CaptureError,

    ValidationError,
}

impl Into<&'static str> for &PublicErrorType {
    fn into(self) -> &'static str {
        match self {
            PublicErrorType::InternalServerError => "internal-server-error",
            PublicErrorType::NotFound => "not-found",
            PublicErrorType::InvalidFileName => "invalid-file-name",
            PublicErrorType::CaptureError => "capture-error",
            PublicErrorType::ValidationError => "validation-error",
        }
    }
}

impl std::fmt::Debug for PublicErrorType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}

impl std::fmt::Display for PublicErrorType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}

#[derive(serde::Serialize, serde::Deserialize, ToSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error: PublicErrorType,
    pub error_description: Option<String>,
    pub validation: Option<HashMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: PublicErrorType::InternalServerError,
            error_description: None,
            validation: None,
        }
    }
}

impl Error {
    fn to_error_response(&self) -> ErrorResponse {
        tracing::error!("Handling error: {:?}", self);
        match self {
            Error::ValidationErrors(err) => {
                let mut validation = HashMap::new();

                for (field, errors) in err.field_errors().iter() {
                    let messages: Vec<String> = errors
                        .iter()
                        .map(|e| {
                            if let Some(message) = &e.message {
                                message.to_string()
                            } else {
                                format!("validation error on {}", field)
                            }
                        })
                        .collect();
                    validation.insert(field.to_string(), messages);
                }

                ErrorResponse {
                    error: PublicErrorType::ValidationError,
                    error_description: Some("Validation errors found".to_string()),
                    validation: Some(validation),
                }
            },
            Error::Storage(shashin_storage::Error::NotFound { .. }) => {
                ErrorResponse {
                    error: PublicErrorType::NotFound,
                    error_description: Some("File not found".to_string()),
                    validation: None,
                }
            },
            Error::Storage(err @ shashin_storage::Error::InvalidFileName { .. }) => {
                ErrorResponse {
                    error: PublicErrorType::InvalidFileName,
                    error_description: Some(err.to_string()),
                    validation: None,
                }
            },
            Error::Capture(err) => {
                ErrorResponse {
                    error: PublicErrorType::CaptureError,
                    error_description: Some(format!("Error capturing screenshot: {err}")),
                    validation: None,
                }
            },
            _ => ErrorResponse::internal(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            Error::Json(_) | Error::ValidationErrors(_) => actix_web::http::StatusCode::BAD_REQUEST,
            Error::Storage(shashin_storage::Error::NotFound { .. }) => {
                actix_web::http::StatusCode::NOT_FOUND
            },
            Error::Storage(shashin_storage::Error::InvalidFileName { .. }) => {
                actix_web::http::StatusCode::BAD_REQUEST
            },
            Error::Storage(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::Capture(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::Config(_) | Error::IoError(_) => {
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        let response = self.to_error_response();
        actix_web::HttpResponse::build(self.status_code()).json(response)
    }
}
