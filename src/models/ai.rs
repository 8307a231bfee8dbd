//! Payloads for the backend's AI collaborators: the email generator and the
//! ATS resume analyzer. Both are opaque server-side services; these types only
//! describe what goes over the wire.

use serde::{Deserialize, Serialize};

/// Kind of candidate email to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailType {
    /// Rejection.
    Refus,
    /// Follow-up.
    Relance,
    /// Interview invitation.
    Invitation,
}

impl std::str::FromStr for EmailType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "refus" | "rejection" => Ok(Self::Refus),
            "relance" | "follow_up" | "follow-up" => Ok(Self::Relance),
            "invitation" => Ok(Self::Invitation),
            other => Err(format!("unknown email type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateEmailRequest {
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_title: String,
    pub company_name: String,

    /// `YYYY-MM-DD`.
    pub application_date: String,
    pub interview_date: Option<String>,
    pub email_type: EmailType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedEmail {
    #[serde(default)]
    pub email_body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Response of `/ats-analyze/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsAnalysisResult {
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<AtsAnalysis>,
    #[serde(default)]
    pub file_metadata: Option<AtsFileMetadata>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub summary: AtsSummary,
    pub detailed_analysis: AtsDetailedAnalysis,
    #[serde(default)]
    pub improvement_suggestions: Vec<AtsSuggestion>,
    #[serde(default)]
    pub quick_wins: Vec<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsSummary {
    pub quality_score: f64,
    pub grade: String,
    #[serde(default)]
    pub grade_color: String,
    pub ats_compatible: bool,
    #[serde(default)]
    pub ats_confidence: f64,
    #[serde(default)]
    pub overall_feedback: String,
    #[serde(default)]
    pub score_explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsDetailedAnalysis {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub ats_issues: Vec<String>,
    #[serde(default)]
    pub missing_sections: Vec<String>,
    #[serde(default)]
    pub statistics: Option<AtsStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsStatistics {
    pub word_count: i64,
    pub section_count: i64,
    pub bullet_points: i64,
    pub tech_keywords: i64,
    pub action_verbs: i64,
    pub has_email: bool,
    pub has_phone: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsSuggestion {
    pub priority: SuggestionPriority,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsFileMetadata {
    pub filename: String,
    pub file_type: String,
    pub word_count: i64,
    pub char_count: i64,
    pub file_size_kb: f64,
}

impl AtsAnalysisResult {
    /// Suggestions with high priority first.
    pub fn suggestions_by_priority(&self) -> Vec<&AtsSuggestion> {
        let mut suggestions: Vec<&AtsSuggestion> = self
            .analysis
            .iter()
            .flat_map(|a| a.improvement_suggestions.iter())
            .collect();
        suggestions.sort_by_key(|s| s.priority as u8);
        suggestions
    }
}
