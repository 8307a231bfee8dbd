//! Profile editor with resume upload.

use super::{Page, PageContext};
use crate::models::{ProfileUpdate, UserProfile};
use std::path::Path;

pub async fn load(ctx: &PageContext) -> Page<UserProfile> {
    Page::load(ctx.token(), |token| async move { ctx.client.get_profile(&token).await }).await
}

/// Save profile fields, then reload the profile.
pub async fn save(ctx: &PageContext, page: &mut Page<UserProfile>, update: &ProfileUpdate) {
    let saved = page
        .act(ctx.token(), |token| async move {
            ctx.client.update_profile(&token, update).await
        })
        .await;

    if saved.is_some() {
        page.state = load(ctx).await.state;
        page.notice = Some("Profile saved".to_string());
    }
}

/// Upload a resume file, then reload the profile so the new URL shows.
pub async fn upload_resume(ctx: &PageContext, page: &mut Page<UserProfile>, path: &Path) {
    let uploaded = page
        .act(ctx.token(), |token| async move {
            let bytes = tokio::fs::read(path).await?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("resume.pdf");
            ctx.client.upload_resume(&token, filename, bytes).await
        })
        .await;

    if uploaded.is_some() {
        page.state = load(ctx).await.state;
        page.notice = Some("Resume uploaded successfully".to_string());
    }
}
