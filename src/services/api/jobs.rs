//! Job routes under `/jobs/`.

use crate::error::AppError;
use crate::models::{Job, JobFilters, JobInput};
use crate::services::api_client::{ApiClient, RequestOptions};
use serde_json::Value;

impl ApiClient {
    /// Public job board.
    pub async fn list_jobs(&self, token: Option<&str>, filters: &JobFilters) -> Result<Vec<Job>, AppError> {
        let options = RequestOptions::get()
            .with_query("job_type", filters.job_type.map(|t| t.as_str()))
            .with_query("location", filters.location.as_deref())
            .with_query("search", filters.search.as_deref());
        self.send_json("/jobs/", options, token).await
    }

    pub async fn get_job(&self, token: Option<&str>, job_id: i64) -> Result<Job, AppError> {
        self.get_json(&format!("/jobs/{}/", job_id), token).await
    }

    pub async fn create_job(&self, token: &str, input: &JobInput) -> Result<Job, AppError> {
        self.send_json("/jobs/create/", RequestOptions::post(input)?, Some(token))
            .await
    }

    pub async fn update_job(&self, token: &str, job_id: i64, input: &JobInput) -> Result<Job, AppError> {
        let endpoint = format!("/jobs/{}/update/", job_id);
        self.send_json(&endpoint, RequestOptions::patch(input)?, Some(token))
            .await
    }

    pub async fn delete_job(&self, token: &str, job_id: i64) -> Result<(), AppError> {
        let endpoint = format!("/jobs/{}/delete/", job_id);
        self.send_unit(&endpoint, RequestOptions::delete(), Some(token))
            .await
    }

    /// Flip a posting between active and inactive.
    pub async fn toggle_job_active(&self, token: &str, job_id: i64) -> Result<Value, AppError> {
        let endpoint = format!("/jobs/recruiter/jobs/{}/toggle/", job_id);
        self.request(&endpoint, RequestOptions::post_empty(), Some(token))
            .await
    }

    /// Bookmark a job for the current candidate.
    pub async fn save_job(&self, token: &str, job_id: i64) -> Result<Value, AppError> {
        let endpoint = format!("/jobs/{}/save/", job_id);
        self.request(&endpoint, RequestOptions::post_empty(), Some(token))
            .await
    }

    pub async fn saved_jobs(&self, token: &str) -> Result<Value, AppError> {
        self.request("/jobs/candidate/saved-jobs/", RequestOptions::get(), Some(token))
            .await
    }

    /// Quick-apply with a JSON body (no resume upload).
    pub async fn apply_to_job(&self, token: &str, job_id: i64, cover_letter: &str) -> Result<Value, AppError> {
        let endpoint = format!("/jobs/{}/apply/", job_id);
        let body = serde_json::json!({ "cover_letter": cover_letter });
        self.request(&endpoint, RequestOptions::post(body)?, Some(token))
            .await
    }

    /// Jobs ranked for the current candidate by the backend's matcher.
    pub async fn ai_recommendations(&self, token: &str, limit: Option<u32>) -> Result<Value, AppError> {
        let options = RequestOptions::get().with_query("limit", limit);
        self.request("/jobs/ai/recommendations/", options, Some(token))
            .await
    }
}
