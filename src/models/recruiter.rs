//! Recruiter dashboard statistics.

use super::job::Job;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecruiterCounts {
    #[serde(default)]
    pub total_jobs: i64,
    #[serde(default)]
    pub active_jobs: i64,
    #[serde(default)]
    pub total_applications: i64,
}

/// One row of the per-status application breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    /// Kept as a string: the legacy job application table uses its own set
    /// of statuses.
    pub status: String,
    pub count: i64,
}


/// Response of `/jobs/recruiter/stats/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecruiterStats {
    #[serde(default)]
    pub stats: RecruiterCounts,
    #[serde(default)]
    pub applications_by_status: Vec<StatusCount>,
    #[serde(default)]
    pub recent_jobs: Vec<Job>,
}
