//! Candidate interview schedule.

use super::{Page, PageContext};
use crate::models::Interview;

pub async fn load(ctx: &PageContext) -> Page<Vec<Interview>> {
    Page::load(ctx.token(), |token| async move {
        ctx.client.list_interviews(&token).await
    })
    .await
}

/// Interviews that have not started yet, soonest first.
pub fn upcoming(interviews: &[Interview], now: chrono::DateTime<chrono::Utc>) -> Vec<&Interview> {
    let mut upcoming: Vec<&Interview> = interviews.iter().filter(|i| i.is_upcoming(now)).collect();
    upcoming.sort_by_key(|i| i.starts_at());
    upcoming
}
