//! Data models for the application.
//!
//! These are plain records returned by the backend. The client never derives
//! invariants over them; pages only apply optimistic local patches after a
//! successful mutation.

pub mod ai;
pub mod application;
pub mod interview;
pub mod job;
pub mod notification;
pub mod recruiter;
pub mod user;

// Re-exports for convenient access
pub use ai::{
    AtsAnalysisResult, EmailType, GenerateEmailRequest, GeneratedEmail, SendEmailRequest,
};
pub use application::{Application, ApplicationStats, ApplicationStatus, StatusUpdate};
pub use interview::{Interview, InterviewType};
pub use job::{ExperienceLevel, Job, JobFilters, JobInput, JobType};
pub use notification::Notification;
pub use recruiter::RecruiterStats;
pub use user::{
    Company, LoginRequest, LoginResponse, MessageResponse, ProfileUpdate, Recruiter,
    RegisterRequest, UserProfile, UserRole,
};
