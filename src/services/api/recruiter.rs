//! Recruiter routes: own jobs, applications to them, and company details.

use crate::error::AppError;
use crate::models::{Application, ApplicationStatus, Company, Job, RecruiterStats, StatusUpdate};
use crate::services::api_client::{ApiClient, RequestOptions};

impl ApiClient {
    pub async fn recruiter_stats(&self, token: &str) -> Result<RecruiterStats, AppError> {
        self.get_json("/jobs/recruiter/stats/", Some(token)).await
    }

    /// Jobs posted by the current recruiter.
    pub async fn recruiter_jobs(&self, token: &str) -> Result<Vec<Job>, AppError> {
        self.get_json("/jobs/recruiter/jobs/", Some(token)).await
    }

    pub async fn recruiter_applications(
        &self,
        token: &str,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, AppError> {
        let options = RequestOptions::get().with_query("status", status);
        self.send_json("/recruiter/applications/", options, Some(token))
            .await
    }

    pub async fn recruiter_job_applications(
        &self,
        token: &str,
        job_id: i64,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<Application>, AppError> {
        let endpoint = format!("/recruiter/applications/job/{}/", job_id);
        let options = RequestOptions::get().with_query("status", status);
        self.send_json(&endpoint, options, Some(token)).await
    }

    pub async fn recruiter_application(&self, token: &str, id: i64) -> Result<Application, AppError> {
        self.get_json(&format!("/recruiter/applications/{}/", id), Some(token))
            .await
    }

    /// Move an application to any status; the backend validates the change.
    pub async fn update_application_status(
        &self,
        token: &str,
        id: i64,
        status: ApplicationStatus,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        let endpoint = format!("/recruiter/applications/{}/status/", id);
        let body = StatusUpdate {
            status,
            reason: reason.map(String::from),
        };
        self.send_unit(&endpoint, RequestOptions::post(body)?, Some(token))
            .await
    }

    pub async fn get_company(&self, token: &str) -> Result<Company, AppError> {
        self.get_json("/users/recruiter/company/", Some(token)).await
    }

    pub async fn update_company(&self, token: &str, company: &Company) -> Result<(), AppError> {
        self.send_unit(
            "/users/recruiter/company/",
            RequestOptions::put(company)?,
            Some(token),
        )
        .await
    }
}
