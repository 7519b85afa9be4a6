use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Hackathon lifecycle container for criteria and projects
///
/// Status is one of upcoming/active/reviewing/completed (enforced by the
/// schema). Scoring only happens during the review phase, but that
/// transition is owned by the surrounding system, not this engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hackathon {
    pub hackathon_id: Uuid,
    pub title: String,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
