//! Interview model.

use super::application::Application;
use serde::{Deserialize, Serialize};

/// Format of an interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Phone,
    Video,
    Technical,
    Onsite,
}

impl InterviewType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phone Screen",
            Self::Video => "Video Call",
            Self::Technical => "Technical Interview",
            Self::Onsite => "On-site Interview",
        }
    }
}

/// A scheduled interview for an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub application: i64,
    #[serde(default)]
    pub application_details: Option<Application>,
    pub scheduled_date: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: i64,
    pub interview_type: InterviewType,
    #[serde(default)]
    pub interviewer: Option<i64>,
    #[serde(default)]
    pub interviewer_name: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub meeting_link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_duration() -> i64 {
    60
}

impl Interview {
    /// Parsed start time, if the timestamp is RFC 3339.
    pub fn starts_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.scheduled_date)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }

    pub fn is_upcoming(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.starts_at().is_some_and(|start| start >= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_interview_decoding_and_schedule() {
        let interview: Interview = serde_json::from_value(json!({
            "id": 2,
            "application": 11,
            "scheduled_date": "2025-03-01T09:00:00+01:00",
            "interview_type": "technical",
            "meeting_link": "https://meet.example.com/abc"
        }))
        .unwrap();

        assert_eq!(interview.duration_minutes, 60);
        assert_eq!(interview.interview_type.label(), "Technical Interview");

        let before = chrono::Utc.with_ymd_and_hms(2025, 3, 1, 7, 59, 0).unwrap();
        let after = chrono::Utc.with_ymd_and_hms(2025, 3, 1, 8, 1, 0).unwrap();
        assert!(interview.is_upcoming(before));
        assert!(!interview.is_upcoming(after));
    }
}
