//! Client Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx answer; `message` is whatever the backend put in its JSON body
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Message for an alert, preferring the backend's own wording.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            ApiError::Status { status, message: None } => format!("{} (HTTP {})", fallback, status),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::Status { status: 500, message: Some("Failed to create project".into()) };
        assert_eq!(err.user_message("Could not create project"), "Failed to create project");
        assert_eq!(err.to_string(), "Failed to create project");
    }

    #[test]
    fn test_user_message_fallbacks() {
        let err = ApiError::Status { status: 404, message: None };
        assert_eq!(err.user_message("Could not delete note"), "Could not delete note (HTTP 404)");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Could not delete note"), "Could not delete note");
        assert_eq!(err.to_string(), "network error: offline");
    }
}
