//! Candidate-side application, interview and notification routes.

use crate::error::AppError;
use crate::models::{Application, ApplicationStats, ApplicationStatus, Interview, Notification};
use crate::services::api_client::{ApiClient, RequestOptions, UploadForm};
use serde_json::{json, Value};

impl ApiClient {
    pub async fn list_applications(
        &self,
        token: &str,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, AppError> {
        let options = RequestOptions::get().with_query("status", status);
        self.send_json("/applications/", options, Some(token)).await
    }

    pub async fn get_application(&self, token: &str, id: i64) -> Result<Application, AppError> {
        self.get_json(&format!("/applications/{}/", id), Some(token))
            .await
    }

    /// Submit an application with its resume as a multipart upload.
    pub async fn create_application(
        &self,
        token: &str,
        job_id: i64,
        cover_letter: &str,
        resume_name: &str,
        resume: Vec<u8>,
    ) -> Result<Value, AppError> {
        let form = UploadForm::new()
            .text("job", job_id.to_string())
            .text("cover_letter", cover_letter)
            .file("resume", resume_name, resume);
        self.upload_file("/applications/", form, Some(token)).await
    }

    /// Withdraw an application.
    pub async fn delete_application(&self, token: &str, id: i64) -> Result<(), AppError> {
        let endpoint = format!("/applications/{}/", id);
        self.send_unit(&endpoint, RequestOptions::delete(), Some(token))
            .await
    }

    pub async fn application_stats(&self, token: &str) -> Result<ApplicationStats, AppError> {
        self.get_json("/stats/applications/", Some(token)).await
    }

    pub async fn list_interviews(&self, token: &str) -> Result<Vec<Interview>, AppError> {
        self.get_json("/interviews/", Some(token)).await
    }

    pub async fn list_notifications(&self, token: &str) -> Result<Vec<Notification>, AppError> {
        self.get_json("/notifications/", Some(token)).await
    }

    pub async fn mark_all_notifications_read(&self, token: &str) -> Result<(), AppError> {
        self.send_unit(
            "/notifications/mark_all_read/",
            RequestOptions::post(json!({}))?,
            Some(token),
        )
        .await
    }
}
