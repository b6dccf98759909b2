//! Analytics Endpoint

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Analytics;

impl ApiClient {
    pub async fn analytics(&self) -> Result<Analytics, ApiError> {
        self.get_json("/api/analytics").await
    }
}
