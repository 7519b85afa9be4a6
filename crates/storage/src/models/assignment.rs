use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Judge-to-projects mapping for one hackathon's review phase
///
/// Created by an organizer action outside this service; read-only to the
/// judge it names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JudgeAssignment {
    pub assignment_id: Uuid,
    pub hackathon_id: Uuid,
    pub judge_id: Uuid,
    pub role: String,
    pub project_ids: Vec<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}

/// Roles allowed to score projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JudgeRole {
    Admin,
    Moderator,
    Judge,
}

impl JudgeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Judge => "judge",
        }
    }

    /// Parse a role string; `None` means the role is not judge-eligible.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "moderator" => Some(Self::Moderator),
            "judge" => Some(Self::Judge),
            _ => None,
        }
    }
}

impl std::fmt::Display for JudgeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
