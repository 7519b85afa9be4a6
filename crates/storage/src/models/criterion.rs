use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One weighted scoring criterion in a hackathon's rubric
///
/// Weights are integer percentages. Rubrics should sum to 100 across a
/// hackathon's criteria, but the aggregation engine normalizes by the sum
/// of weights actually present, so a misconfigured rubric still scores.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScoringCriterion {
    pub criterion_id: Uuid,
    pub hackathon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub weight: i32,
    pub min_score: i32,
    pub max_score: i32,
    pub is_required: bool,
    pub display_order: i32,
    pub created_at: chrono::NaiveDateTime,
}
