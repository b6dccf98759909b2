//! Backend API Client
//!
//! Browser `fetch` wrappers for the dashboard's REST endpoints, organized by domain.

mod analytics;
mod note;
mod project;
mod task;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::forms::FormBody;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Thin handle over the backend base URL. Cheap to clone into async blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST a form; the body of a 2xx answer is not needed by any caller.
    async fn post_form(&self, path: &str, body: &FormBody) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, id = body.get("id"), "POST");
        let request = Request::post(&url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body.encode())
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await?;
        ensure_ok(response).await?;
        Ok(())
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = extract_error_message(&text);
    tracing::warn!(status, ?message, url = %response.url(), "backend rejected request");
    Err(ApiError::Status { status, message })
}

/// Best-effort message from a failure body: JSON `error`, then `message`,
/// then a short plain-text body such as the backend's `http.Error` output.
pub fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return ["error", "message"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string);
    }
    if body.starts_with('<') || body.chars().count() > 200 {
        return None;
    }
    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_prefers_error_key() {
        assert_eq!(
            extract_error_message(r#"{"error":"Failed to create project","message":"other"}"#),
            Some("Failed to create project".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"message":"Project name required"}"#),
            Some("Project name required".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"error":"","message":"fallback"}"#),
            Some("fallback".to_string())
        );
    }

    #[test]
    fn test_extract_error_without_usable_json() {
        assert_eq!(extract_error_message(r#"{"status":"bad"}"#), None);
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("<html><body>oops</body></html>"), None);
        assert_eq!(
            extract_error_message("Description required\n"),
            Some("Description required".to_string())
        );
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(ApiClient::default().url("/api/tasks"), "/api/tasks");
        assert_eq!(ApiClient::new("http://localhost:5050").url("/api/notes"), "http://localhost:5050/api/notes");
    }
}
