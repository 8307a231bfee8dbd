//! Page controllers.
//!
//! Each page reads the bearer token from the session, redirects to the login
//! route when there is none, otherwise calls the API client and keeps the
//! result as local state. Mutating actions call the client again and patch
//! the local copy once the server has accepted the change. Pages never share
//! state; they only hand each other a [`Route`].
//!
//! Pages are organized by portal area:
//! - `auth`: login, registration, logout, password reset
//! - `dashboard`, `profile`: the current user
//! - `jobs`, `applications`, `interviews`, `notifications`: candidate views
//! - `recruiter`, `company`: recruiter views
//! - `admin`: recruiter validation
//! - `ats`: resume analyzer

pub mod admin;
pub mod applications;
pub mod ats;
pub mod auth;
pub mod company;
pub mod dashboard;
pub mod interviews;
pub mod jobs;
pub mod notifications;
pub mod profile;
pub mod recruiter;

use crate::error::AppError;
use crate::models::UserRole;
use crate::services::{ApiClient, SessionManager};
use serde::Serialize;
use std::future::Future;

/// Everything a page needs: the shared client and the session.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub client: ApiClient,
    pub session: SessionManager,
}

impl PageContext {
    pub fn new(client: ApiClient, session: SessionManager) -> Self {
        Self { client, session }
    }

    /// The stored access token, or `NotAuthenticated`.
    pub fn token(&self) -> Result<String, AppError> {
        self.session.require_token()
    }

    /// The access token, only if the stored role matches `role`.
    pub fn token_for_role(&self, role: UserRole) -> Result<String, AppError> {
        if self.session.role() != Some(role) {
            return Err(AppError::NotAuthenticated);
        }
        self.token()
    }
}

/// Navigation target handed back by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Login,
    Dashboard,
    Applications { success: bool },
    RecruiterJobs,
    RecruiterApplications { success: bool },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Applications { success: false } => "/dashboard/applications",
            Self::Applications { success: true } => "/dashboard/applications?success=true",
            Self::RecruiterJobs => "/dashboard/recruiter/jobs",
            Self::RecruiterApplications { success: false } => "/dashboard/recruiter/applications",
            Self::RecruiterApplications { success: true } => {
                "/dashboard/recruiter/applications?success=true"
            }
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// What a page currently shows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
    Redirect(Route),
}

impl<T> PageState<T> {
    /// Settle a fetch. A missing session redirects to login; any other
    /// failure is shown inline as its message.
    pub fn settle(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(AppError::NotAuthenticated) => Self::Redirect(Route::Login),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Redirect(route) => Some(*route),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A page's fetched data plus the inline feedback of its actions.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub state: PageState<T>,

    /// Set while a mutating action is in flight.
    pub pending: bool,

    /// Failure of the last action, shown next to the data.
    pub action_error: Option<String>,

    /// Success message of the last action.
    pub notice: Option<String>,

    /// Navigation requested by the last action.
    pub navigate: Option<Route>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            state: PageState::Loading,
            pending: false,
            action_error: None,
            notice: None,
            navigate: None,
        }
    }
}

impl<T> Page<T> {
    pub fn settled(result: Result<T, AppError>) -> Self {
        Self {
            state: PageState::settle(result),
            ..Self::default()
        }
    }

    /// Load with `token`. Without one the page redirects to login and
    /// `fetch` is never called.
    pub async fn load<F, Fut>(token: Result<String, AppError>, fetch: F) -> Self
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        match token {
            Ok(token) => Self::settled(fetch(token).await),
            Err(e) => Self::settled(Err(e)),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.state.data_mut()
    }

    /// Run a mutating action.
    ///
    /// Without a token the page navigates to login and nothing is sent.
    /// Returns the action's result only on success; failures are recorded in
    /// `action_error`.
    pub async fn act<R, F, Fut>(&mut self, token: Result<String, AppError>, call: F) -> Option<R>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<R, AppError>>,
    {
        self.action_error = None;
        self.notice = None;

        let result = match token {
            Ok(token) => {
                self.pending = true;
                let result = call(token).await;
                self.pending = false;
                result
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(value) => Some(value),
            Err(AppError::NotAuthenticated) => {
                self.navigate = Some(Route::Login);
                None
            }
            Err(e) => {
                log::warn!("Page action failed: {}", e);
                self.action_error = Some(e.to_string());
                None
            }
        }
    }
}

/// State of a standalone form (login, register, analyzer...).
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormState {
    pub pending: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub navigate: Option<Route>,
}

impl FormState {
    fn begin(&mut self) {
        self.pending = true;
        self.error = None;
        self.message = None;
    }

    fn fail(&mut self, error: impl Into<String>) {
        self.pending = false;
        self.error = Some(error.into());
    }

    fn succeed(&mut self, message: Option<String>, navigate: Option<Route>) {
        self.pending = false;
        self.message = message;
        self.navigate = navigate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(
            Route::RecruiterApplications { success: true }.to_string(),
            "/dashboard/recruiter/applications?success=true"
        );
        assert_eq!(Route::Applications { success: false }.path(), "/dashboard/applications");
    }

    #[test]
    fn test_settle_maps_errors() {
        let state: PageState<u8> = PageState::settle(Err(AppError::NotAuthenticated));
        assert_eq!(state.redirect(), Some(Route::Login));

        let state: PageState<u8> =
            PageState::settle(Err(AppError::api_full(r#"{"detail":"Forbidden"}"#, 403, "/x/")));
        assert_eq!(state.error(), Some(r#"{"detail":"Forbidden"}"#));

        let state = PageState::settle(Ok(5u8));
        assert_eq!(state.data(), Some(&5));
    }

    #[tokio::test]
    async fn test_load_without_token_never_fetches() {
        let mut called = false;
        let page: Page<u8> = Page::load(Err(AppError::NotAuthenticated), |_| {
            called = true;
            async { Ok(1) }
        })
        .await;
        assert!(!called);
        assert_eq!(page.state.redirect(), Some(Route::Login));
    }

    #[tokio::test]
    async fn test_act_records_failure() {
        let mut page = Page::settled(Ok(vec![1, 2, 3]));
        let out: Option<()> = page
            .act(Ok("t".to_string()), |_| async { Err(AppError::api("nope")) })
            .await;
        assert!(out.is_none());
        assert_eq!(page.action_error.as_deref(), Some("nope"));
        assert!(!page.pending);
        assert_eq!(page.data(), Some(&vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_act_without_token_navigates_to_login() {
        let mut page = Page::settled(Ok(0u8));
        let out: Option<()> = page
            .act(Err(AppError::NotAuthenticated), |_| async { Ok(()) })
            .await;
        assert!(out.is_none());
        assert_eq!(page.navigate, Some(Route::Login));
    }

    #[test]
    fn test_serialized_state_shape() {
        let state: PageState<u8> = PageState::Redirect(Route::Login);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "redirect");
        assert_eq!(json["data"]["route"], "login");
    }
}
