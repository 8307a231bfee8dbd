//! Recruiter company settings.

use super::{Page, PageContext, PageState};
use crate::models::Company;

pub async fn load(ctx: &PageContext) -> Page<Company> {
    Page::load(ctx.token(), |token| async move { ctx.client.get_company(&token).await }).await
}

/// Save the company, then reload it from the server.
pub async fn save(ctx: &PageContext, page: &mut Page<Company>, company: &Company) {
    // Blank optional fields are sent as null.
    let company = Company {
        name: company.name.trim().to_string(),
        address: company.address.clone().filter(|a| !a.trim().is_empty()),
        website: company.website.clone().filter(|w| !w.trim().is_empty()),
    };

    let saved = page
        .act(ctx.token(), |token| async move {
            ctx.client.update_company(&token, &company).await?;
            ctx.client.get_company(&token).await
        })
        .await;

    if let Some(company) = saved {
        page.state = PageState::Ready(company);
        page.notice = Some("Company information saved successfully.".to_string());
    }
}
