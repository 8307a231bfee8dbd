//! Job application model and its status lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Status of an application.
///
/// The set is fixed. Any value may be chosen by a recruiter; the backend
/// decides whether a transition is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    UnderReview,
    Shortlisted,
    InterviewScheduled,
    Interviewed,
    Rejected,
    Accepted,
    OfferSent,
    Hired,
}

impl ApplicationStatus {
    /// Every status, in pipeline order.
    pub const ALL: [ApplicationStatus; 9] = [
        Self::Applied,
        Self::UnderReview,
        Self::Shortlisted,
        Self::InterviewScheduled,
        Self::Interviewed,
        Self::Rejected,
        Self::Accepted,
        Self::OfferSent,
        Self::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::UnderReview => "under_review",
            Self::Shortlisted => "shortlisted",
            Self::InterviewScheduled => "interview_scheduled",
            Self::Interviewed => "interviewed",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
            Self::OfferSent => "offer_sent",
            Self::Hired => "hired",
        }
    }

    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::UnderReview => "Under Review",
            Self::Shortlisted => "Shortlisted",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Interviewed => "Interviewed",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
            Self::OfferSent => "Offer Sent",
            Self::Hired => "Hired",
        }
    }

    /// Badge color classes.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Applied => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
            Self::UnderReview => "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200",
            Self::Shortlisted => "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200",
            Self::InterviewScheduled => "bg-indigo-100 text-indigo-800 dark:bg-indigo-900 dark:text-indigo-200",
            Self::Interviewed => "bg-teal-100 text-teal-800 dark:bg-teal-900 dark:text-teal-200",
            Self::Rejected => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
            Self::Accepted => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
            Self::OfferSent => "bg-emerald-100 text-emerald-800 dark:bg-emerald-900 dark:text-emerald-200",
            Self::Hired => "bg-green-200 text-green-900 dark:bg-green-800 dark:text-green-100",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s.to_lowercase())
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate's application to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub candidate: i64,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    pub job: i64,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub cover_letter: String,

    /// URL of the uploaded resume.
    #[serde(default)]
    pub resume: Option<String>,

    pub status: ApplicationStatus,
    pub applied_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl Application {
    /// Date part (`YYYY-MM-DD`) of the submission timestamp.
    pub fn applied_on(&self) -> &str {
        self.applied_at.get(..10).unwrap_or(&self.applied_at)
    }
}

/// Candidate-side application statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total_applications: i64,
    #[serde(default)]
    pub by_status: HashMap<ApplicationStatus, i64>,
    #[serde(default)]
    pub recent_applications: i64,
    #[serde(default)]
    pub upcoming_interviews: i64,
}

/// Body of a recruiter status change.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_statuses_round_trip_labels() {
        assert_eq!(ApplicationStatus::ALL.len(), 9);
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
            assert!(!status.label().is_empty());
            assert!(status.color().starts_with("bg-"));
        }
    }

    #[test]
    fn test_parse_unknown_status() {
        assert_eq!(ApplicationStatus::parse("pending"), None);
        assert_eq!(
            ApplicationStatus::parse("OFFER_SENT"),
            Some(ApplicationStatus::OfferSent)
        );
    }

    #[test]
    fn test_application_decoding() {
        let app: Application = serde_json::from_value(json!({
            "id": 11,
            "candidate": 5,
            "candidate_name": "Asma",
            "job": 7,
            "job_title": "Backend Engineer",
            "company_name": "Acme",
            "cover_letter": "Hello",
            "resume": "http://localhost:8000/media/resumes/cv.pdf",
            "status": "interview_scheduled",
            "applied_at": "2025-01-06T08:30:00Z",
            "updated_at": "2025-01-07T08:30:00Z",
            "notes": ""
        }))
        .unwrap();
        assert_eq!(app.status, ApplicationStatus::InterviewScheduled);
        assert_eq!(app.status.label(), "Interview Scheduled");
        assert_eq!(app.applied_on(), "2025-01-06");
    }

    #[test]
    fn test_stats_by_status_keys() {
        let stats: ApplicationStats = serde_json::from_value(json!({
            "total_applications": 3,
            "by_status": {"applied": 2, "hired": 1},
            "recent_applications": 1,
            "upcoming_interviews": 0
        }))
        .unwrap();
        assert_eq!(stats.by_status[&ApplicationStatus::Applied], 2);
        assert_eq!(stats.by_status[&ApplicationStatus::Hired], 1);
    }

    #[test]
    fn test_status_update_omits_missing_reason() {
        let body = StatusUpdate {
            status: ApplicationStatus::Rejected,
            reason: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"status": "rejected"}));
    }
}
