//! AI email generation and ATS resume analysis. Both run server-side.

use crate::error::AppError;
use crate::models::{AtsAnalysisResult, GenerateEmailRequest, GeneratedEmail, SendEmailRequest};
use crate::services::api_client::{ApiClient, RequestOptions, UploadForm};
use serde_json::json;

impl ApiClient {
    pub async fn generate_email(
        &self,
        token: &str,
        request: &GenerateEmailRequest,
    ) -> Result<GeneratedEmail, AppError> {
        self.send_json("/ai/email/generate/", RequestOptions::post(request)?, Some(token))
            .await
    }

    pub async fn send_email(&self, token: &str, request: &SendEmailRequest) -> Result<(), AppError> {
        self.send_unit("/ai/email/send/", RequestOptions::post(request)?, Some(token))
            .await
    }

    pub async fn analyze_resume_text(&self, token: &str, text: &str) -> Result<AtsAnalysisResult, AppError> {
        let body = json!({ "text": text });
        self.send_json("/ats-analyze/", RequestOptions::post(body)?, Some(token))
            .await
    }

    pub async fn analyze_resume_file(
        &self,
        token: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<AtsAnalysisResult, AppError> {
        let form = UploadForm::new().file("resume_file", filename, bytes);
        self.upload_json("/ats-analyze/", form, Some(token)).await
    }
}
