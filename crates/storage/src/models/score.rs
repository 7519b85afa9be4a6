use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's score sheet for one project
///
/// At most one record exists per (judge_id, project_id); every write is a
/// full-record upsert. `criterion_values` maps criterion name to an integer
/// value, where 0 means "not yet scored" rather than "scored zero".
/// `total_score` is a cache of the weighted total; readers recompute it from
/// `criterion_values` and the current rubric before serving it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub judge_id: Uuid,
    pub project_id: Uuid,
    pub hackathon_id: Uuid,
    #[schema(value_type = Object)]
    pub criterion_values: Json<HashMap<String, i32>>,
    pub comments: Option<String>,
    pub is_draft: bool,
    pub total_score: Decimal,
    pub submitted_at: chrono::NaiveDateTime,
}

impl Score {
    pub fn values(&self) -> &HashMap<String, i32> {
        &self.criterion_values.0
    }
}
