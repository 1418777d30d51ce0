//! # Domain models shared by the API client and the UI
//!
//! Every type here mirrors a JSON shape returned by the IAM or course backends
//! (camelCase on the wire). The console never owns these records: it caches
//! them for display and sends actions back to the backends.
//!
//! | Type | Backend | Notes |
//! |------|---------|-------|
//! | [`Role`] | IAM | Integer code on the wire (`0` admin, `1` examiner, `2` student). |
//! | [`AuthUser`] / [`AuthResponse`] | IAM | Login and registration responses. |
//! | [`Session`] | client | Client-side session built from an [`AuthResponse`]. |
//! | [`Semester`], [`Subject`], [`Exam`] | course | Read-only catalogue. |
//! | [`Examiner`], [`Submission`] | course | Submissions are graded and assigned remotely. |
//! | [`Violation`] | course | Verified by administrators. |
//! | [`Rubric`] | course | Grading criteria per exam. |

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role of an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Admin,
    Examiner,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Examiner, Role::Student];

    pub fn code(self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Examiner => 1,
            Role::Student => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Examiner => "Examiner",
            Role::Student => "Student",
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Role::Admin),
            1 => Ok(Role::Examiner),
            2 => Ok(Role::Student),
            other => Err(format!("unknown role code {other}")),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        role.code()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User profile returned by the IAM backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Body of a successful login, registration or refresh call.
///
/// Older IAM deployments answer with `token`, newer ones with `accessToken`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AuthResponse {
    /// The bearer token, preferring `token` over `accessToken`.
    pub fn bearer(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or(self.access_token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// The authenticated user's session as kept on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(user: AuthUser, access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            user_id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            access_token,
            refresh_token,
        }
    }

    /// Name shown in the navbar, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: i64,
    pub subject_id: i64,
    pub semester_id: i64,
    pub title: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
}

impl Exam {
    /// Whether the exam starts strictly after `now`. Unparsable start times
    /// never count as upcoming.
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        parse_timestamp(&self.start_time).is_some_and(|start| start > now)
    }
}

/// Payload for `POST /api/exams`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExam {
    pub subject_id: i64,
    pub semester_id: i64,
    pub title: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Examiner {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub exam_id: i64,
    pub student_id: String,
    pub submitted_at: String,
    #[serde(default)]
    pub assigned_examiner_id: Option<i64>,
    #[serde(default)]
    pub total_score: Option<f64>,
    pub status: String,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        matches!(self.status.to_lowercase().as_str(), "submitted" | "pending")
    }

    pub fn is_graded(&self) -> bool {
        matches!(self.status.to_lowercase().as_str(), "graded" | "completed")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: i64,
    pub submission_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    pub verified: bool,
    pub created_at: String,
}

/// Payload for `POST /api/violations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewViolation {
    pub submission_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricCriterion {
    pub id: i64,
    pub criterion_name: String,
    pub max_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rubric {
    pub id: i64,
    pub exam_id: i64,
    pub name: String,
    #[serde(default)]
    pub criteria: Vec<RubricCriterion>,
}

/// A criterion inside a [`NewRubric`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCriterion {
    pub criterion_name: String,
    pub max_score: f64,
}

/// Payload for `POST /api/rubrics`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRubric {
    pub exam_id: i64,
    pub name: String,
    pub rubric_criteria: Vec<NewCriterion>,
}

/// Parse a backend timestamp. Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC) or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a backend timestamp for tables: `YYYY-MM-DD HH:MM`, or the raw
/// string when it cannot be parsed.
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}
