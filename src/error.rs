use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Everything an endpoint can fail with. All variants surface to the caller
/// as HTTP 400; none of them terminates the process or affects other
/// in-flight requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A declared required field is absent, not a string, or blank after
    /// trimming. Raised before any provider call is made.
    #[error("Please enter valid {0}")]
    Validation(&'static str),

    /// The provider call itself failed: network error or non-2xx status.
    #[error("{0}")]
    Upstream(String),

    /// The provider answered 2xx but the body does not match the operation's
    /// expected structure.
    #[error("unexpected provider response: {0}")]
    Shape(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(_) => {}
            ApiError::Upstream(msg) => warn!("provider call failed: {}", msg),
            ApiError::Shape(msg) => warn!("provider response malformed: {}", msg),
        }
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_field_description() {
        let err = ApiError::Validation("language code");
        assert_eq!(err.to_string(), "Please enter valid language code");
    }

    #[test]
    fn all_variants_map_to_bad_request() {
        for err in [
            ApiError::Validation("text"),
            ApiError::Upstream("connection refused".into()),
            ApiError::Shape("missing translations".into()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
