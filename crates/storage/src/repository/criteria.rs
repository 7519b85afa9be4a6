use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::ScoringCriterion;

/// Read-only access to hackathon rubrics. Authoring happens elsewhere;
/// the judging engine never mutates criteria.
pub struct CriteriaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CriteriaRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Ordered rubric for a hackathon. A hackathon without published
    /// criteria has no rubric, reported as NotFound.
    pub async fn get_rubric(&self, hackathon_id: Uuid) -> Result<Vec<ScoringCriterion>> {
        let criteria = sqlx::query_as::<_, ScoringCriterion>(
            r#"
            SELECT criterion_id, hackathon_id, name, description, weight,
                   min_score, max_score, is_required, display_order, created_at
            FROM scoring_criteria
            WHERE hackathon_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(self.pool)
        .await?;

        if criteria.is_empty() {
            return Err(StorageError::NotFound);
        }

        Ok(criteria)
    }
}
