//! Recruiter dashboard, job management and application review.
//!
//! Every page here requires the `recruiter` role in the stored session, not
//! just a token.

use super::{FormState, Page, PageContext, PageState, Route};
use crate::error::AppError;
use crate::models::{
    Application, ApplicationStatus, EmailType, GenerateEmailRequest, Job, JobInput,
    RecruiterStats, SendEmailRequest, UserProfile, UserRole,
};
use serde::Serialize;

fn recruiter_token(ctx: &PageContext) -> Result<String, AppError> {
    ctx.token_for_role(UserRole::Recruiter)
}

/// Dashboard data: profile and statistics, fetched together.
#[derive(Debug, Clone, Serialize)]
pub struct RecruiterDashboard {
    pub profile: UserProfile,
    pub stats: RecruiterStats,
}

pub async fn load_dashboard(ctx: &PageContext) -> Page<RecruiterDashboard> {
    Page::load(recruiter_token(ctx), |token| async move {
        let (profile, stats) = futures::try_join!(
            ctx.client.get_profile(&token),
            ctx.client.recruiter_stats(&token)
        )?;
        Ok::<_, AppError>(RecruiterDashboard { profile, stats })
    })
    .await
}

/// Jobs posted by the current recruiter.
pub async fn load_jobs(ctx: &PageContext) -> Page<Vec<Job>> {
    Page::load(recruiter_token(ctx), |token| async move {
        ctx.client.recruiter_jobs(&token).await
    })
    .await
}

pub async fn delete_job(ctx: &PageContext, page: &mut Page<Vec<Job>>, job_id: i64) {
    let deleted = page
        .act(recruiter_token(ctx), |token| async move {
            ctx.client.delete_job(&token, job_id).await
        })
        .await;

    if deleted.is_some() {
        if let Some(jobs) = page.data_mut() {
            jobs.retain(|job| job.id != job_id);
        }
        page.notice = Some("Job deleted".to_string());
    }
}

/// Flip a posting between active and inactive.
pub async fn toggle_job(ctx: &PageContext, page: &mut Page<Vec<Job>>, job_id: i64) {
    let toggled = page
        .act(recruiter_token(ctx), |token| async move {
            ctx.client.toggle_job_active(&token, job_id).await
        })
        .await;

    if let Some(response) = toggled {
        if let Some(job) = page
            .data_mut()
            .and_then(|jobs| jobs.iter_mut().find(|job| job.id == job_id))
        {
            // Prefer the server's value when it reports one.
            job.is_active = response
                .get("is_active")
                .and_then(|v| v.as_bool())
                .unwrap_or(!job.is_active);
        }
    }
}

/// Create a posting. Navigates to the job list on success.
pub async fn create_job(ctx: &PageContext, input: &JobInput) -> (FormState, Option<Job>) {
    let mut form = FormState::default();
    let Ok(token) = recruiter_token(ctx) else {
        form.navigate = Some(Route::Login);
        return (form, None);
    };

    form.begin();
    match ctx.client.create_job(&token, input).await {
        Ok(job) => {
            form.succeed(Some("Job created".to_string()), Some(Route::RecruiterJobs));
            (form, Some(job))
        }
        Err(e) => {
            form.fail(e.to_string());
            (form, None)
        }
    }
}

/// Edit page: load the job to prefill the form.
pub async fn load_job(ctx: &PageContext, job_id: i64) -> Page<Job> {
    Page::load(recruiter_token(ctx), |token| async move {
        ctx.client.get_job(Some(&token), job_id).await
    })
    .await
}

pub async fn update_job(ctx: &PageContext, page: &mut Page<Job>, input: &JobInput) {
    let Some(job_id) = page.data().map(|job| job.id) else {
        return;
    };

    let updated = page
        .act(recruiter_token(ctx), |token| async move {
            ctx.client.update_job(&token, job_id, input).await
        })
        .await;

    if let Some(job) = updated {
        page.state = PageState::Ready(job);
        page.navigate = Some(Route::RecruiterJobs);
    }
}

/// Applications to the recruiter's jobs, optionally narrowed to one job.
pub async fn load_applications(
    ctx: &PageContext,
    job_id: Option<i64>,
    status: Option<ApplicationStatus>,
) -> Page<Vec<Application>> {
    Page::load(recruiter_token(ctx), |token| async move {
        match job_id {
            Some(job_id) => {
                ctx.client
                    .recruiter_job_applications(&token, job_id, status)
                    .await
            }
            None => ctx.client.recruiter_applications(&token, status).await,
        }
    })
    .await
}

/// Application detail plus the AI email composer.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReview {
    pub application: Application,

    /// Last generated (or edited) email body.
    pub email_draft: Option<String>,
    pub email_type: Option<EmailType>,
}

pub async fn load_application(ctx: &PageContext, id: i64) -> Page<ApplicationReview> {
    Page::load(recruiter_token(ctx), |token| async move {
        let application = ctx.client.recruiter_application(&token, id).await?;
        Ok::<_, AppError>(ApplicationReview {
            application,
            email_draft: None,
            email_type: None,
        })
    })
    .await
}

/// Set any status. Patches the local copy and returns to the list.
pub async fn update_status(
    ctx: &PageContext,
    page: &mut Page<ApplicationReview>,
    status: ApplicationStatus,
    reason: Option<&str>,
) {
    let Some(id) = page.data().map(|review| review.application.id) else {
        return;
    };

    let updated = page
        .act(recruiter_token(ctx), |token| async move {
            ctx.client
                .update_application_status(&token, id, status, reason)
                .await
        })
        .await;

    if updated.is_some() {
        if let Some(review) = page.data_mut() {
            review.application.status = status;
        }
        page.navigate = Some(Route::RecruiterApplications { success: true });
    }
}

/// Ask the backend to draft an email of the given kind for this candidate.
pub async fn generate_email(ctx: &PageContext, page: &mut Page<ApplicationReview>, email_type: EmailType) {
    let Some(request) = page
        .data()
        .map(|review| email_request(&review.application, email_type))
    else {
        return;
    };

    let generated = page
        .act(recruiter_token(ctx), |token| async move {
            ctx.client.generate_email(&token, &request).await
        })
        .await;

    if let (Some(email), Some(review)) = (generated, page.data_mut()) {
        review.email_draft = Some(email.email_body);
        review.email_type = Some(email_type);
    }
}

/// Replace the draft with the recruiter's edits.
pub fn edit_email(page: &mut Page<ApplicationReview>, body: impl Into<String>) {
    if let Some(review) = page.data_mut() {
        review.email_draft = Some(body.into());
    }
}

/// Send the current draft to the candidate.
pub async fn send_email(ctx: &PageContext, page: &mut Page<ApplicationReview>) {
    let request = match page.data().map(send_request) {
        Some(Ok(request)) => request,
        Some(Err(e)) => {
            page.action_error = Some(e.to_string());
            return;
        }
        None => return,
    };

    let sent = page
        .act(recruiter_token(ctx), |token| async move {
            ctx.client.send_email(&token, &request).await
        })
        .await;

    if sent.is_some() {
        page.notice = Some("Email sent successfully.".to_string());
    }
}

fn email_request(application: &Application, email_type: EmailType) -> GenerateEmailRequest {
    GenerateEmailRequest {
        candidate_name: application.candidate_name.clone().unwrap_or_default(),
        candidate_email: application.candidate_email.clone().unwrap_or_default(),
        job_title: application.job_title.clone().unwrap_or_default(),
        company_name: application.company_name.clone().unwrap_or_default(),
        application_date: application.applied_on().to_string(),
        interview_date: None,
        email_type,
        language: Some("en".to_string()),
        tone: Some("professional".to_string()),
    }
}

fn send_request(review: &ApplicationReview) -> Result<SendEmailRequest, AppError> {
    let body = review
        .email_draft
        .clone()
        .filter(|b| !b.trim().is_empty())
        .ok_or_else(|| AppError::invalid_input_field("Generate an email first", "email_draft"))?;
    let to = review
        .application
        .candidate_email
        .clone()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::invalid_input_field("Candidate email is unknown", "to"))?;
    let job_title = review.application.job_title.as_deref().unwrap_or("Your application");

    Ok(SendEmailRequest {
        to,
        subject: format!("{} - Application update", job_title),
        body,
    })
}
