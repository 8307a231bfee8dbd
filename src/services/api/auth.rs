//! Account routes under `/users/`.

use crate::error::AppError;
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, ProfileUpdate, RegisterRequest, UserProfile,
};
use crate::services::api_client::{ApiClient, RequestOptions, UploadForm};
use serde_json::json;

impl ApiClient {
    /// Exchange credentials for an access/refresh token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send_json("/users/login/", RequestOptions::post(body)?, None)
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, AppError> {
        self.send_json("/users/register/", RequestOptions::post(request)?, None)
            .await
    }

    /// Blacklist the refresh token server-side.
    pub async fn logout(&self, token: &str, refresh_token: &str) -> Result<(), AppError> {
        let body = json!({ "refresh_token": refresh_token });
        self.send_unit("/users/logout/", RequestOptions::post(body)?, Some(token))
            .await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, AppError> {
        let body = json!({ "email": email });
        self.send_json("/users/password-reset/", RequestOptions::post(body)?, None)
            .await
    }

    /// Set a new password using the `uid`/`token` pair from the reset email.
    pub async fn reset_password(
        &self,
        uid: &str,
        reset_token: &str,
        password: &str,
        password2: &str,
    ) -> Result<MessageResponse, AppError> {
        let endpoint = format!(
            "/users/reset-password/{}/{}/",
            urlencoding::encode(uid),
            urlencoding::encode(reset_token)
        );
        let body = json!({ "password": password, "password2": password2 });
        self.send_json(&endpoint, RequestOptions::post(body)?, None)
            .await
    }

    pub async fn get_profile(&self, token: &str) -> Result<UserProfile, AppError> {
        self.get_json("/users/profile/", Some(token)).await
    }

    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, AppError> {
        self.send_json("/users/profile/", RequestOptions::patch(update)?, Some(token))
            .await
    }

    /// Upload a resume file to the current user's profile.
    pub async fn upload_resume(
        &self,
        token: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<serde_json::Value, AppError> {
        let form = UploadForm::new().file("resume", filename, bytes);
        self.upload_file("/users/upload-resume/", form, Some(token))
            .await
    }
}
