use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::JudgeAssignment;

/// Repository for judge assignment lookups. Assignments are created by an
/// organizer action outside this service and read-only here.
pub struct AssignmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AssignmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The judge's assignment for one hackathon. NotFound is the normal
    /// "nothing to judge" case, not an exceptional condition.
    pub async fn find_for_judge(
        &self,
        hackathon_id: Uuid,
        judge_id: Uuid,
    ) -> Result<JudgeAssignment> {
        let assignment = sqlx::query_as::<_, JudgeAssignment>(
            r#"
            SELECT assignment_id, hackathon_id, judge_id, role, project_ids, created_at
            FROM judge_assignments
            WHERE hackathon_id = $1 AND judge_id = $2
            "#,
        )
        .bind(hackathon_id)
        .bind(judge_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(assignment)
    }

    /// All assignments for a judge, newest hackathon first
    pub async fn list_for_judge(&self, judge_id: Uuid) -> Result<Vec<JudgeAssignment>> {
        let assignments = sqlx::query_as::<_, JudgeAssignment>(
            r#"
            SELECT assignment_id, hackathon_id, judge_id, role, project_ids, created_at
            FROM judge_assignments
            WHERE judge_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(judge_id)
        .fetch_all(self.pool)
        .await?;

        Ok(assignments)
    }
}
