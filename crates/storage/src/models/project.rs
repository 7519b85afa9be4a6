use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Project submission, owned by the external data store. Only the fields
/// needed for display and score keying are read here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Project {
    pub project_id: Uuid,
    pub hackathon_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub submitted_at: chrono::NaiveDateTime,
}
