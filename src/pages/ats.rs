//! ATS resume analyzer.
//!
//! Scoring happens server-side; this page only submits the resume (as text,
//! a local file, or the URL of an already uploaded file) and keeps the result.

use super::{FormState, PageContext, Route};
use crate::error::AppError;
use crate::models::AtsAnalysisResult;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AtsAnalyzer {
    pub form: FormState,
    pub result: Option<AtsAnalysisResult>,
}

impl AtsAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn analyze_text(&mut self, ctx: &PageContext, text: &str) {
        if text.trim().is_empty() {
            self.form.fail("Please paste your resume text.");
            return;
        }
        let Some(token) = self.start(ctx) else { return };
        let result = ctx.client.analyze_resume_text(&token, text).await;
        self.finish(result);
    }

    pub async fn analyze_file(&mut self, ctx: &PageContext, path: &Path) {
        let Some(token) = self.start(ctx) else { return };
        let result = async {
            let bytes = tokio::fs::read(path).await?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("resume.pdf");
            ctx.client.analyze_resume_file(&token, filename, bytes).await
        }
        .await;
        self.finish(result);
    }

    /// Download a stored resume, then analyze it as a file.
    pub async fn analyze_url(&mut self, ctx: &PageContext, url: &str) {
        let Some(token) = self.start(ctx) else { return };
        let result = async {
            let bytes = ctx.client.download(url).await?;
            let filename = url
                .rsplit('/')
                .next()
                .filter(|n| !n.is_empty())
                .unwrap_or("resume.pdf");
            ctx.client.analyze_resume_file(&token, filename, bytes).await
        }
        .await;
        self.finish(result);
    }

    fn start(&mut self, ctx: &PageContext) -> Option<String> {
        self.result = None;
        match ctx.token() {
            Ok(token) => {
                self.form.begin();
                Some(token)
            }
            Err(e) => {
                log::debug!("ATS analysis needs a session: {}", e);
                self.form.navigate = Some(Route::Login);
                None
            }
        }
    }

    fn finish(&mut self, result: Result<AtsAnalysisResult, AppError>) {
        match result {
            Ok(analysis) if !analysis.success => {
                let message = analysis
                    .error
                    .clone()
                    .unwrap_or_else(|| "Analysis failed".to_string());
                self.form.fail(message);
            }
            Ok(analysis) => {
                self.form.succeed(None, None);
                self.result = Some(analysis);
            }
            Err(e) => self.form.fail(e.to_string()),
        }
    }
}
