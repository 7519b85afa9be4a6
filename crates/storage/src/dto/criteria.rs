use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ScoringCriterion;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CriterionResponse {
    pub criterion_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub weight: i32,
    pub min_score: i32,
    pub max_score: i32,
    pub is_required: bool,
    pub display_order: i32,
}

impl From<ScoringCriterion> for CriterionResponse {
    fn from(c: ScoringCriterion) -> Self {
        Self {
            criterion_id: c.criterion_id,
            name: c.name,
            description: c.description,
            weight: c.weight,
            min_score: c.min_score,
            max_score: c.max_score,
            is_required: c.is_required,
            display_order: c.display_order,
        }
    }
}

/// Ordered rubric for one hackathon, with the weight total echoed so the
/// UI can flag rubrics that do not sum to 100
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RubricResponse {
    pub hackathon_id: Uuid,
    pub criteria: Vec<CriterionResponse>,
    pub weight_total: i32,
}
