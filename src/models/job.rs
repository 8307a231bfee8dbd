//! Job posting model.

use serde::{Deserialize, Deserializer, Serialize};

/// Contract type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
        Self::Remote,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
            Self::Remote => "Remote",
        }
    }

    /// Wire value used in query strings and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Internship => "internship",
            Self::Remote => "remote",
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = String;

    /// Accepts the wire value in any case. Unknown values are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|job_type| job_type.as_str() == wanted)
            .ok_or_else(|| format!("unknown job type '{}'", s.trim()))
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority expected for a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry Level",
            Self::Mid => "Mid Level",
            Self::Senior => "Senior Level",
            Self::Executive => "Executive",
        }
    }
}

/// A job posting as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    #[serde(default = "default_experience")]
    pub experience_level: ExperienceLevel,

    /// ID of the recruiter who posted the job.
    pub posted_by: i64,
    #[serde(default)]
    pub posted_by_name: Option<String>,

    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Deadline as an ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub application_deadline: Option<String>,

    /// Salary bounds. The backend serializes decimals as strings.
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub salary_min: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_decimal")]
    pub salary_max: Option<f64>,
    #[serde(default = "default_currency")]
    pub salary_currency: String,

    /// Comma-separated skill lists.
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub preferred_skills: String,

    /// Set server-side for the requesting candidate.
    #[serde(default)]
    pub has_applied: Option<bool>,
}

fn default_experience() -> ExperienceLevel {
    ExperienceLevel::Entry
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Job {
    pub fn required_skills_list(&self) -> Vec<String> {
        split_skills(&self.required_skills)
    }

    pub fn preferred_skills_list(&self) -> Vec<String> {
        split_skills(&self.preferred_skills)
    }

    /// Parse the application deadline, if set and well-formed.
    pub fn deadline_date(&self) -> Option<chrono::NaiveDate> {
        let raw = self.application_deadline.as_deref()?;
        // Older postings carry a full timestamp instead of a date.
        let date_part = raw.get(..10).unwrap_or(raw);
        chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    pub fn has_applied(&self) -> bool {
        self.has_applied.unwrap_or(false)
    }
}

/// Split a comma-separated skills string, dropping blanks.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Payload for creating or updating a job posting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters accepted by the public job list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Accept a decimal as a JSON number, a numeric string, or null.
fn de_opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Decimal::Number(n)) => Ok(Some(n)),
        Some(Decimal::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Decimal::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "id": 7,
            "title": "Backend Engineer",
            "description": "Build APIs",
            "company": "Acme",
            "location": "Tunis",
            "job_type": "full_time",
            "experience_level": "senior",
            "posted_by": 3,
            "posted_by_name": "Rim",
            "is_active": true,
            "created_at": "2025-01-04T10:00:00Z",
            "updated_at": "2025-01-05T10:00:00Z",
            "application_deadline": "2025-02-01",
            "salary_min": "3000.00",
            "salary_max": 4500,
            "salary_currency": "TND",
            "required_skills": "Rust, SQL, ,Docker",
            "preferred_skills": "",
            "has_applied": false
        })
    }

    #[test]
    fn test_job_decodes_decimal_strings() {
        let job: Job = serde_json::from_value(sample()).unwrap();
        assert_eq!(job.salary_min, Some(3000.0));
        assert_eq!(job.salary_max, Some(4500.0));
        assert_eq!(job.job_type, JobType::FullTime);
        assert_eq!(job.experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_skill_lists() {
        let job: Job = serde_json::from_value(sample()).unwrap();
        assert_eq!(job.required_skills_list(), vec!["Rust", "SQL", "Docker"]);
        assert!(job.preferred_skills_list().is_empty());
    }

    #[test]
    fn test_deadline_date() {
        let mut job: Job = serde_json::from_value(sample()).unwrap();
        assert_eq!(
            job.deadline_date(),
            chrono::NaiveDate::from_ymd_opt(2025, 2, 1)
        );
        job.application_deadline = Some("2025-03-10T00:00:00Z".to_string());
        assert_eq!(
            job.deadline_date(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 10)
        );
        job.application_deadline = None;
        assert_eq!(job.deadline_date(), None);
    }

    #[test]
    fn test_job_type_labels() {
        assert_eq!("PART_TIME".parse::<JobType>(), Ok(JobType::PartTime));
        assert!("fulltime".parse::<JobType>().is_err());
        assert_eq!(JobType::Internship.label(), "Internship");
        assert_eq!(JobType::Remote.to_string(), "remote");
    }

    #[test]
    fn test_job_input_skips_unset_fields() {
        let input = JobInput {
            title: Some("QA".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, json!({"title": "QA", "is_active": false}));
    }
}
