//! Test response wrapper with fluent assertions

use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::{StatusCode, header::HeaderMap},
};
use serde::de::DeserializeOwned;
use shashin_service::{ErrorResponse, PublicErrorType};

/// Wrapper around ServiceResponse providing fluent assertions
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    /// Create TestResponse from ServiceResponse
    pub(crate) async fn new<B>(resp: ServiceResponse<B>) -> Self
    where
        B: MessageBody,
        B::Error: std::fmt::Debug,
    {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = actix_web::body::to_bytes(resp.into_body())
            .await
            .unwrap()
            .to_vec();
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get the response status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the raw response body bytes
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as a string
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a response header value as a string, if present
    pub fn header(
        &self,
        name: &str,
    ) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    // Status assertions

    /// Assert status equals expected, returns self for chaining
    pub fn assert_status(
        self,
        expected: StatusCode,
    ) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected}, got {}. Body: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Assert status is 200 OK
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    /// Assert status is 400 Bad Request
    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    /// Assert status is 404 Not Found
    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    /// Assert status is 500 Internal Server Error
    pub fn assert_internal_error(self) -> Self {
        self.assert_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    // Header assertions

    /// Assert a header is present with the expected value
    pub fn assert_header(
        self,
        name: &str,
        expected: &str,
    ) -> Self {
        let found = self.header(name);
        assert_eq!(
            found.as_deref(),
            Some(expected),
            "Expected header '{}' to be '{}', got {:?}",
            name,
            expected,
            found
        );
        self
    }

    /// Assert a 302 redirect to the given location
    pub fn assert_redirects_to(
        self,
        location: &str,
    ) -> Self {
        let found = self.header("location");
        assert_eq!(
            found.as_deref(),
            Some(location),
            "Expected redirect to '{}', got {:?}",
            location,
            found
        );
        self.assert_status(StatusCode::FOUND)
    }

    // Body parsing

    /// Assert the body contains the given substring
    pub fn assert_body_contains(
        self,
        needle: &str,
    ) -> Self {
        let body = self.body_string();
        assert!(
            body.contains(needle),
            "Expected body to contain '{}'. Body: {}",
            needle,
            body
        );
        self
    }

    /// Parse body as JSON, panics if parsing fails
    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse response body as JSON: {}. Body: {}",
                e,
                self.body_string()
            )
        })
    }

    /// Parse body as ErrorResponse
    pub fn error_response(self) -> ErrorResponse {
        self.json()
    }

    // Error assertions

    /// Assert error type matches expected
    pub fn assert_error_type(
        self,
        expected: PublicErrorType,
    ) -> Self {
        let err: ErrorResponse = serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse error response: {}. Body: {}",
                e,
                self.body_string()
            )
        });
        assert_eq!(
            format!("{:?}", err.error),
            format!("{:?}", expected),
            "Expected error type {:?}, got {:?}",
            expected,
            err.error
        );
        self
    }

    /// Assert response contains a validation error for the specified field
    pub fn assert_validation_error(
        self,
        field: &str,
    ) -> Self {
        let err: ErrorResponse = serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse error response: {}. Body: {}",
                e,
                self.body_string()
            )
        });
        assert!(
            err.validation
                .as_ref()
                .map(|v| v.contains_key(field))
                .unwrap_or(false),
            "Expected validation error for field '{}', but validation map was: {:?}",
            field,
            err.validation
        );
        self
    }

    /// Assert error description contains expected substring
    pub fn assert_error_contains(
        self,
        substring: &str,
    ) -> Self {
        let err: ErrorResponse = serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Failed to parse error response: {}. Body: {}",
                e,
                self.body_string()
            )
        });
        let desc = err.error_description.unwrap_or_default();
        assert!(
            desc.contains(substring),
            "Expected error description to contain '{}', but got: {}",
            substring,
            desc
        );
        self
    }
}

impl std::fmt::Debug for TestResponse {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("TestResponse")
            .field("status", &self.status)
            .field("body", &self.body_string())
            .finish()
    }
}
