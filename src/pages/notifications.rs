//! Notification list.

use super::{Page, PageContext};
use crate::models::Notification;

pub async fn load(ctx: &PageContext) -> Page<Vec<Notification>> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.list_notifications(&token).await
    })
    .await
}

/// Mark everything read, then patch the local copy.
pub async fn mark_all_read(ctx: &PageContext, page: &mut Page<Vec<Notification>>) {
    let done = page
        .act(ctx.token(), |token| async move {
            ctx.client.mark_all_notifications_read(&token).await
        })
        .await;

    if done.is_some() {
        if let Some(list) = page.data_mut() {
            list.iter_mut().for_each(|n| n.is_read = true);
        }
    }
}
