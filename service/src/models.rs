use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

/// Request body for capturing a screenshot
#[derive(Deserialize, ToSchema, validator::Validate)]
pub struct CaptureRequest {
    /// Page to capture. Targets without a scheme are resolved against the
    /// server base URL
    #[validate(length(min = 1, message = "url must not be empty"))]
    #[schema(example = "https://example.com")]
    pub url: String,

    /// Extra headers to send while loading the page
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// File name to store the image under (".png" is appended when missing)
    #[validate(length(min = 1, max = 128, message = "output_filename must be 1-128 characters"))]
    #[schema(example = "screenshot")]
    pub output_filename: Option<String>,
}

/// Request body for capturing a screenshot behind basic auth
#[derive(Deserialize, ToSchema, validator::Validate)]
pub struct BasicAuthCaptureRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub capture: CaptureRequest,

    /// Username sent in the Authorization header
    #[validate(length(min = 1, message = "username must not be empty"))]
    #[schema(example = "user")]
    pub username: String,

    /// Password sent in the Authorization header
    #[schema(value_type = String, example = "pass")]
    pub password: SecretString,
}

/// Request body for capturing a screenshot behind a bearer token
#[derive(Deserialize, ToSchema, validator::Validate)]
pub struct BearerAuthCaptureRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub capture: CaptureRequest,

    /// Token sent as `Bearer <token>` in the Authorization header
    #[schema(value_type = String, example = "your-token")]
    pub bearer_token: SecretString,
}

/// Location of a stored screenshot
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CaptureResponse {
    /// Relative URL the image can be fetched from
    #[schema(example = "/static/screenshot_67e5504410b1426f9247bb680e5fe0c8.png")]
    pub file_url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "File screenshot.png deleted")]
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
