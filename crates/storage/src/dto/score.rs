use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Score;

/// Request payload for saving a score sheet, draft or final
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertScoreRequest {
    pub hackathon_id: Uuid,

    /// Criterion name to integer value; 0 means "not yet scored"
    pub criterion_values: HashMap<String, i32>,

    #[validate(length(max = 4000, message = "Comments must be at most 4000 characters"))]
    pub comments: Option<String>,

    #[serde(default = "default_is_draft")]
    pub is_draft: bool,
}

fn default_is_draft() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub score_id: Uuid,
    pub judge_id: Uuid,
    pub project_id: Uuid,
    pub hackathon_id: Uuid,
    pub criterion_values: HashMap<String, i32>,
    pub comments: Option<String>,
    pub is_draft: bool,
    pub total_score: Decimal,
    pub submitted_at: chrono::NaiveDateTime,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            score_id: score.score_id,
            judge_id: score.judge_id,
            project_id: score.project_id,
            hackathon_id: score.hackathon_id,
            criterion_values: score.criterion_values.0,
            comments: score.comments,
            is_draft: score.is_draft,
            total_score: score.total_score,
            submitted_at: score.submitted_at,
        }
    }
}

/// Request for the live total shown while a judge fills in the sheet.
/// Nothing is persisted; the same weighted-total function runs on submit.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ComputeTotalRequest {
    pub hackathon_id: Uuid,
    pub criterion_values: HashMap<String, i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComputeTotalResponse {
    pub total_score: Decimal,
}
