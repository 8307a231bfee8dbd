//! Hirelink API client.
//!
//! Single choke point for every HTTP call to the backend. Builds the full URL
//! from the configured base, attaches JSON and bearer-token headers, and
//! normalizes responses: non-success statuses become an error carrying the
//! raw body, successful bodies are parsed as JSON when possible.

use crate::error::AppError;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{multipart, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., `https://hirelink.example.com/api`).
    pub base_url: String,

    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Per-request options: method, JSON body, extra headers and query pairs.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// POST without a body.
    pub fn post_empty() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    pub fn post(body: impl Serialize) -> Result<Self, AppError> {
        Self::with_body(Method::POST, body)
    }

    pub fn patch(body: impl Serialize) -> Result<Self, AppError> {
        Self::with_body(Method::PATCH, body)
    }

    pub fn put(body: impl Serialize) -> Result<Self, AppError> {
        Self::with_body(Method::PUT, body)
    }

    fn with_body(method: Method, body: impl Serialize) -> Result<Self, AppError> {
        Ok(Self {
            method,
            body: Some(serde_json::to_value(body)?),
            ..Self::default()
        })
    }

    /// Add a header. Caller headers override the default JSON content type.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query pair, skipped when the value is `None`.
    pub fn with_query(mut self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((name.into(), value.to_string()));
        }
        self
    }
}

/// One part of a multipart upload.
#[derive(Debug, Clone)]
pub enum UploadPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,

        /// Sent as the part's `Content-Type`. The backend rejects resume
        /// parts without one.
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

/// MIME type for an upload, from the file extension.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Multipart form body for file uploads (resumes and other binary payloads).
///
/// Kept as plain data until send time so it can be inspected and cloned.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    parts: Vec<UploadPart>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(UploadPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a file part. The MIME type is inferred from `filename`.
    pub fn file(self, name: impl Into<String>, filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime = mime_for_filename(&filename).to_string();
        self.file_with_mime(name, filename, mime, bytes)
    }

    pub fn file_with_mime(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(UploadPart::File {
            name: name.into(),
            filename: filename.into(),
            mime: Some(mime.into()),
            bytes,
        });
        self
    }

    pub fn parts(&self) -> &[UploadPart] {
        &self.parts
    }

    fn into_multipart(self) -> Result<multipart::Form, AppError> {
        let mut form = multipart::Form::new();
        for part in self.parts {
            form = match part {
                UploadPart::Text { name, value } => form.text(name, value),
                UploadPart::File {
                    name,
                    filename,
                    mime,
                    bytes,
                } => {
                    let mut file = multipart::Part::bytes(bytes).file_name(filename);
                    if let Some(mime) = mime {
                        file = file.mime_str(&mime)?;
                    }
                    form.part(name, file)
                }
            };
        }
        Ok(form)
    }
}

/// Hirelink API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Join the base URL and a path with exactly one slash between them.
    pub(crate) fn api_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Send a JSON request and return the interpreted response body.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<Value, AppError> {
        let url = self.api_url(path);
        log::debug!(
            "API request {} {} ({})",
            options.method,
            url,
            if bearer(token).is_some() { "with token" } else { "no token" }
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::invalid_input_field("Invalid header name", name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| AppError::invalid_input_field("Invalid header value", name.as_str()))?;
            headers.insert(name, value);
        }
        if let Some(value) = authorization(token)? {
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut request = self.client.request(options.method, &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_string(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        interpret_response(status, &text, path)
    }

    /// Send a multipart POST. No JSON content type is set, so the multipart
    /// boundary generated for the form is preserved.
    pub async fn upload_file(
        &self,
        path: &str,
        form: UploadForm,
        token: Option<&str>,
    ) -> Result<Value, AppError> {
        let url = self.api_url(path);
        log::debug!(
            "API upload POST {} ({} parts, {})",
            url,
            form.parts().len(),
            if bearer(token).is_some() { "with token" } else { "no token" }
        );

        let mut request = self.client.post(&url).multipart(form.into_multipart()?);
        if let Some(value) = authorization(token)? {
            request = request.header(header::AUTHORIZATION, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        interpret_response(status, &text, path)
    }

    /// Send a request and decode the body into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let value = self.request(path, options, token).await?;
        decode(value, path)
    }

    /// GET a resource and decode the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, AppError> {
        self.send_json(path, RequestOptions::get(), token).await
    }

    /// Send a request whose response body is irrelevant.
    pub async fn send_unit(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        self.request(path, options, token).await.map(|_| ())
    }

    /// Upload a multipart form and decode the body into `T`.
    pub async fn upload_json<T: DeserializeOwned>(
        &self,
        path: &str,
        form: UploadForm,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let value = self.upload_file(path, form, token).await?;
        decode(value, path)
    }

    /// Fetch raw bytes from an absolute URL (e.g. a stored resume).
    ///
    /// Sent without the bearer token: media URLs are served publicly.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, AppError> {
        log::debug!("Downloading {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api_full(
                format!("Failed to fetch {} (status {})", url, status.as_u16()),
                status.as_u16(),
                url,
            ));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// A token counts only when it is non-empty.
fn bearer(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

fn authorization(token: Option<&str>) -> Result<Option<HeaderValue>, AppError> {
    bearer(token)
        .map(|t| {
            HeaderValue::from_str(&format!("Bearer {}", t))
                .map_err(|_| AppError::invalid_input_field("Invalid token format", "token"))
        })
        .transpose()
}

/// Turn a status and body text into the client's result.
///
/// - non-success: error whose message is the body, or
///   `Request failed with status N` when the body is empty;
/// - success: parsed JSON, the raw text when it is not JSON, or `{}` when
///   the body is empty.
pub fn interpret_response(status: StatusCode, text: &str, endpoint: &str) -> Result<Value, AppError> {
    if !status.is_success() {
        log::warn!("API request {} failed with status {}", endpoint, status.as_u16());
        let message = if text.is_empty() {
            format!("Request failed with status {}", status.as_u16())
        } else {
            text.to_string()
        };
        return Err(AppError::api_full(message, status.as_u16(), endpoint));
    }

    if text.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    Ok(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

fn decode<T: DeserializeOwned>(value: Value, endpoint: &str) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::internal(format!("Failed to parse response from {}: {}", endpoint, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(ClientConfig {
            base_url: base.to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn test_api_url_construction() {
        let c = client("http://localhost:8000/api/");
        assert_eq!(c.api_url("/jobs/"), "http://localhost:8000/api/jobs/");
        assert_eq!(c.api_url("ats-analyze/"), "http://localhost:8000/api/ats-analyze/");
    }

    #[test]
    fn test_error_message_is_raw_body() {
        let err = interpret_response(StatusCode::FORBIDDEN, r#"{"detail":"Forbidden"}"#, "/jobs/")
            .unwrap_err();
        assert_eq!(err.to_string(), r#"{"detail":"Forbidden"}"#);
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn test_error_fallback_message() {
        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "", "/jobs/").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_success_bodies() {
        let parsed = interpret_response(StatusCode::OK, r#"{"id":3}"#, "/jobs/3/").unwrap();
        assert_eq!(parsed, json!({"id": 3}));

        let raw = interpret_response(StatusCode::OK, "deleted", "/jobs/3/delete/").unwrap();
        assert_eq!(raw, Value::String("deleted".to_string()));

        let empty = interpret_response(StatusCode::NO_CONTENT, "", "/jobs/3/delete/").unwrap();
        assert_eq!(empty, json!({}));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        assert!(authorization(Some("")).unwrap().is_none());
        assert!(authorization(None).unwrap().is_none());
        assert_eq!(
            authorization(Some("abc")).unwrap().unwrap(),
            HeaderValue::from_static("Bearer abc")
        );
    }

    #[test]
    fn test_request_options_query_skips_none() {
        let opts = RequestOptions::get()
            .with_query("status", Some("applied"))
            .with_query("limit", None::<u32>);
        assert_eq!(opts.query, vec![("status".to_string(), "applied".to_string())]);
    }

    #[test]
    fn test_upload_form_keeps_part_order() {
        let form = UploadForm::new()
            .text("job", "4")
            .file("resume", "cv.pdf", b"%PDF".to_vec());
        assert_eq!(form.parts().len(), 2);
        assert!(matches!(&form.parts()[0], UploadPart::Text { name, .. } if name == "job"));
        assert!(matches!(&form.parts()[1], UploadPart::File { filename, .. } if filename == "cv.pdf"));
    }

    #[test]
    fn test_file_parts_carry_a_mime_type() {
        assert_eq!(mime_for_filename("cv.pdf"), "application/pdf");
        assert_eq!(mime_for_filename("CV.PDF"), "application/pdf");
        assert_eq!(mime_for_filename("cv.doc"), "application/msword");
        assert_eq!(
            mime_for_filename("cv.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(mime_for_filename("resume"), "application/octet-stream");

        let form = UploadForm::new().file("resume", "cv.docx", Vec::new());
        assert!(matches!(
            &form.parts()[0],
            UploadPart::File { mime: Some(m), .. } if m.ends_with("wordprocessingml.document")
        ));
    }
}
