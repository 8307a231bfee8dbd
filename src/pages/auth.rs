//! Login, registration, logout and password reset.

use super::{FormState, PageContext, Route};
use crate::models::RegisterRequest;
use crate::services::Session;

/// Log in and persist the session. Navigates to the dashboard on success.
pub async fn login(ctx: &PageContext, email: &str, password: &str) -> (FormState, Option<Session>) {
    let mut form = FormState::default();
    form.begin();

    let result = ctx.client.login(email.trim(), password).await;
    let login = match result {
        Ok(login) => login,
        Err(e) => {
            form.fail(e.to_string());
            return (form, None);
        }
    };

    match ctx.session.save_login(&login) {
        Ok(session) => {
            form.succeed(login.message.clone(), Some(Route::Dashboard));
            (form, Some(session))
        }
        Err(e) => {
            form.fail(e.to_string());
            (form, None)
        }
    }
}

pub async fn register(ctx: &PageContext, request: &RegisterRequest) -> FormState {
    let mut form = FormState::default();
    form.begin();

    match ctx.client.register(request).await {
        Ok(response) => form.succeed(
            Some(response.message.unwrap_or_else(|| "Registration successful".to_string())),
            None,
        ),
        Err(e) => form.fail(e.to_string()),
    }
    form
}

/// Log out. The server call is best-effort; the local session is always
/// cleared and the user sent to the login page.
pub async fn logout(ctx: &PageContext) -> FormState {
    let mut form = FormState::default();
    form.begin();

    if let (Ok(token), Some(refresh)) = (ctx.token(), ctx.session.refresh_token()) {
        if let Err(e) = ctx.client.logout(&token, &refresh).await {
            log::warn!("Server-side logout failed: {}", e);
        }
    }

    match ctx.session.clear() {
        Ok(()) => form.succeed(None, Some(Route::Login)),
        Err(e) => {
            form.fail(e.to_string());
            form.navigate = Some(Route::Login);
        }
    }
    form
}

pub async fn request_password_reset(ctx: &PageContext, email: &str) -> FormState {
    let mut form = FormState::default();
    let email = email.trim();
    if email.is_empty() {
        form.fail("Please enter your email address.");
        return form;
    }

    form.begin();
    match ctx.client.request_password_reset(email).await {
        Ok(response) => form.succeed(
            Some(response.message.unwrap_or_else(|| {
                "If an account matches this address, a reset link has been sent.".to_string()
            })),
            None,
        ),
        Err(e) => form.fail(e.to_string()),
    }
    form
}

/// Confirm a reset from the emailed link. Navigates to login on success.
pub async fn reset_password(
    ctx: &PageContext,
    uid: &str,
    reset_token: &str,
    password: &str,
    password2: &str,
) -> FormState {
    let mut form = FormState::default();
    form.begin();

    match ctx
        .client
        .reset_password(uid, reset_token, password, password2)
        .await
    {
        Ok(response) => form.succeed(response.message, Some(Route::Login)),
        Err(e) => form.fail(e.to_string()),
    }
    form
}
