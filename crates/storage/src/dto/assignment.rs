use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::progress::JudgeProgress;

/// Scoring state of one assigned project from the requesting judge's
/// point of view. A draft keeps the project `pending`; only a final
/// score makes it `scored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectScoreStatus {
    Pending,
    Scored,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignedProject {
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectScoreStatus,
    pub has_draft: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HackathonInfo {
    pub hackathon_id: Uuid,
    pub title: String,
    pub status: String,
}

/// Full assignment for one (hackathon, judge) pair: the project list with
/// per-project status plus derived completion metrics
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub assignment_id: Uuid,
    pub hackathon: HackathonInfo,
    pub judge_id: Uuid,
    pub role: String,
    pub projects: Vec<AssignedProject>,
    pub progress: JudgeProgress,
}

/// One row in the judge's cross-hackathon assignment list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentSummary {
    pub assignment_id: Uuid,
    pub hackathon: HackathonInfo,
    pub role: String,
    pub project_ids: Vec<Uuid>,
    pub progress: JudgeProgress,
}
