//! Admin routes.

use crate::error::AppError;
use crate::models::{MessageResponse, Recruiter};
use crate::services::api_client::{ApiClient, RequestOptions};

impl ApiClient {
    /// All recruiter accounts, validated or not.
    pub async fn list_recruiters(&self, token: &str) -> Result<Vec<Recruiter>, AppError> {
        self.get_json("/users/recruiters/", Some(token)).await
    }

    pub async fn validate_recruiter(&self, token: &str, recruiter_id: i64) -> Result<MessageResponse, AppError> {
        let endpoint = format!("/users/validate-recruiter/{}/", recruiter_id);
        self.send_json(&endpoint, RequestOptions::post_empty(), Some(token))
            .await
    }
}
