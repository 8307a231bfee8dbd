//! User, recruiter and company models, plus the auth payloads.

use serde::{Deserialize, Serialize};

/// Role of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Candidate,
    Recruiter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Candidate => "candidate",
            Self::Recruiter => "recruiter",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "candidate" => Ok(Self::Candidate),
            "recruiter" => Ok(Self::Recruiter),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_validated: Option<bool>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,

    /// Comma-separated.
    #[serde(default)]
    pub skills: Option<String>,

    /// URL of the stored resume.
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl UserProfile {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Partial profile update. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

/// Company attached to a recruiter account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Recruiter account as listed for admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recruiter {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_validated: bool,
    #[serde(default, alias = "entreprise")]
    pub company: Option<Company>,
}

/// Credentials for `/users/login/`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: i64,
    pub role: UserRole,
}

/// Account registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_parsing() {
        assert_eq!("Recruiter".parse::<UserRole>(), Ok(UserRole::Recruiter));
        assert!("owner".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut profile: UserProfile = serde_json::from_value(json!({
            "id": 1,
            "username": "asma",
            "email": "asma@example.com",
            "role": "candidate",
            "full_name": ""
        }))
        .unwrap();
        assert_eq!(profile.display_name(), "asma");
        profile.full_name = Some("Asma H.".to_string());
        assert_eq!(profile.display_name(), "Asma H.");
    }

    #[test]
    fn test_recruiter_accepts_entreprise_key() {
        let recruiter: Recruiter = serde_json::from_value(json!({
            "id": 4,
            "username": "rim",
            "email": "rim@acme.tn",
            "is_validated": false,
            "entreprise": {"name": "Acme", "address": "Sfax", "website": null}
        }))
        .unwrap();
        assert_eq!(recruiter.company.unwrap().name, "Acme");
    }

    #[test]
    fn test_login_response() {
        let login: LoginResponse = serde_json::from_value(json!({
            "message": "ok",
            "access_token": "a",
            "refresh_token": "r",
            "user_id": 9,
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(login.role, UserRole::Admin);
        assert_eq!(login.user_id, 9);
    }
}
