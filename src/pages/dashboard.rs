//! Landing dashboard: the current user's profile summary.

use super::{Page, PageContext};
use crate::models::UserProfile;

pub async fn load(ctx: &PageContext) -> Page<UserProfile> {
    Page::load(ctx.token(), |token| async move { ctx.client.get_profile(&token).await }).await
}

/// One-line greeting shown at the top of the dashboard.
pub fn greeting(profile: &UserProfile) -> String {
    format!("Hello, {}", profile.display_name())
}
