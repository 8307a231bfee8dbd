//! Candidate's own applications.

use super::{Page, PageContext};
use crate::models::{Application, ApplicationStatus};

pub async fn load_list(ctx: &PageContext, status: Option<ApplicationStatus>) -> Page<Vec<Application>> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.list_applications(&token, status).await
    })
    .await
}

pub async fn load_detail(ctx: &PageContext, id: i64) -> Page<Application> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.get_application(&token, id).await
    })
    .await
}

/// Withdraw an application and drop it from the list.
pub async fn withdraw(ctx: &PageContext, page: &mut Page<Vec<Application>>, id: i64) {
    let deleted = page
        .act(ctx.token(), |token| async move {
            ctx.client.delete_application(&token, id).await
        })
        .await;

    if deleted.is_some() {
        if let Some(list) = page.data_mut() {
            list.retain(|app| app.id != id);
        }
        page.notice = Some("Application withdrawn".to_string());
    }
}
