//! Candidate job board, job detail and the apply form.

use super::{Page, PageContext, PageState, Route};
use crate::models::{Job, JobFilters};
use serde_json::Value;

pub async fn load_board(ctx: &PageContext, filters: &JobFilters) -> Page<Vec<Job>> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.list_jobs(Some(&token), filters).await
    })
    .await
}

pub async fn load_detail(ctx: &PageContext, job_id: i64) -> Page<Job> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.get_job(Some(&token), job_id).await
    })
    .await
}

/// Bookmark a job.
pub async fn save_job<T>(ctx: &PageContext, page: &mut Page<T>, job_id: i64) {
    let saved = page
        .act(ctx.token(), |token| async move {
            ctx.client.save_job(&token, job_id).await
        })
        .await;
    if saved.is_some() {
        page.notice = Some("Job saved".to_string());
    }
}

/// Open the apply form. A job the candidate already applied to sends them to
/// their applications instead.
pub async fn load_apply(ctx: &PageContext, job_id: i64) -> Page<Job> {
    let mut page = load_detail(ctx, job_id).await;
    if page.data().is_some_and(Job::has_applied) {
        page.state = PageState::Redirect(Route::Applications { success: false });
    }
    page
}

/// Submit an application with its resume.
pub async fn submit_application(
    ctx: &PageContext,
    page: &mut Page<Job>,
    cover_letter: &str,
    resume_name: &str,
    resume: Vec<u8>,
) {
    let Some(job_id) = page.data().map(|job| job.id) else {
        return;
    };

    let submitted = page
        .act(ctx.token(), |token| async move {
            ctx.client
                .create_application(&token, job_id, cover_letter, resume_name, resume)
                .await
        })
        .await;

    if submitted.is_some() {
        if let Some(job) = page.data_mut() {
            job.has_applied = Some(true);
        }
        page.navigate = Some(Route::Applications { success: true });
    }
}

/// Apply without a resume upload. Same outcome as [`submit_application`].
pub async fn quick_apply(ctx: &PageContext, page: &mut Page<Job>, cover_letter: &str) {
    let Some(job_id) = page.data().map(|job| job.id) else {
        return;
    };

    let applied = page
        .act(ctx.token(), |token| async move {
            ctx.client.apply_to_job(&token, job_id, cover_letter).await
        })
        .await;

    if applied.is_some() {
        if let Some(job) = page.data_mut() {
            job.has_applied = Some(true);
        }
        page.navigate = Some(Route::Applications { success: true });
    }
}

/// The candidate's bookmarks. The payload is passed through as returned.
pub async fn load_saved(ctx: &PageContext) -> Page<Value> {
    Page::load(ctx.token(), |token| async move { ctx.client.saved_jobs(&token).await }).await
}

/// Jobs ranked for the candidate by the backend's matcher.
pub async fn load_recommendations(ctx: &PageContext, limit: Option<u32>) -> Page<Value> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.ai_recommendations(&token, limit).await
    })
    .await
}
