//! Admin dashboard: recruiter account validation.

use super::{Page, PageContext};
use crate::models::{Recruiter, UserRole};

/// Recruiter list. Requires both a token and the `admin` role.
pub async fn load(ctx: &PageContext) -> Page<Vec<Recruiter>> {
    Page::load(ctx.token_for_role(UserRole::Admin), |token| async move {
        ctx.client.list_recruiters(&token).await
    })
    .await
}

/// Validate a recruiter account and mark it validated locally.
pub async fn validate(ctx: &PageContext, page: &mut Page<Vec<Recruiter>>, recruiter_id: i64) {
    let validated = page
        .act(ctx.token_for_role(UserRole::Admin), |token| async move {
            ctx.client.validate_recruiter(&token, recruiter_id).await
        })
        .await;

    if validated.is_some() {
        if let Some(recruiter) = page
            .data_mut()
            .and_then(|list| list.iter_mut().find(|r| r.id == recruiter_id))
        {
            recruiter.is_validated = true;
        }
        page.notice = Some("Recruiter account validated.".to_string());
    }
}

/// Recruiters still waiting for validation.
pub fn pending(recruiters: &[Recruiter]) -> impl Iterator<Item = &Recruiter> {
    recruiters.iter().filter(|r| !r.is_validated)
}
