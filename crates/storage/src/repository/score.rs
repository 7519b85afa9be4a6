use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Score;

/// Repository for score records. One record per (judge_id, project_id);
/// every write is a full-record upsert, so concurrent saves from the same
/// judge are last-write-wins.
pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create or overwrite the unique record for this (judge, project)
    /// pair. Idempotent: resubmitting identical input leaves the same
    /// stored state (only `submitted_at` is refreshed).
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert(
        &self,
        judge_id: Uuid,
        project_id: Uuid,
        hackathon_id: Uuid,
        criterion_values: &HashMap<String, i32>,
        comments: Option<&str>,
        is_draft: bool,
        total_score: Decimal,
    ) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (judge_id, project_id, hackathon_id, criterion_values,
                                comments, is_draft, total_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (judge_id, project_id)
            DO UPDATE SET
                hackathon_id = EXCLUDED.hackathon_id,
                criterion_values = EXCLUDED.criterion_values,
                comments = EXCLUDED.comments,
                is_draft = EXCLUDED.is_draft,
                total_score = EXCLUDED.total_score,
                submitted_at = CURRENT_TIMESTAMP
            RETURNING score_id, judge_id, project_id, hackathon_id, criterion_values,
                      comments, is_draft, total_score, submitted_at
            "#,
        )
        .bind(judge_id)
        .bind(project_id)
        .bind(hackathon_id)
        .bind(Json(criterion_values))
        .bind(comments)
        .bind(is_draft)
        .bind(total_score)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::ConstraintViolation(
                    "Project or hackathon for this score no longer exists".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(score)
    }

    /// The judge's existing record for a project, if any. Absence is the
    /// normal state before the first draft save.
    pub async fn find_by_judge_and_project(
        &self,
        judge_id: Uuid,
        project_id: Uuid,
    ) -> Result<Option<Score>> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            SELECT score_id, judge_id, project_id, hackathon_id, criterion_values,
                   comments, is_draft, total_score, submitted_at
            FROM scores
            WHERE judge_id = $1 AND project_id = $2
            "#,
        )
        .bind(judge_id)
        .bind(project_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(score)
    }

    /// All final (non-draft) scores for a project, across judges
    pub async fn list_final_for_project(&self, project_id: Uuid) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT score_id, judge_id, project_id, hackathon_id, criterion_values,
                   comments, is_draft, total_score, submitted_at
            FROM scores
            WHERE project_id = $1 AND is_draft = false
            ORDER BY submitted_at
            "#,
        )
        .bind(project_id)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// One judge's scores (drafts included) across a set of projects,
    /// used to resolve per-project status on an assignment
    pub async fn list_for_judge_in(
        &self,
        judge_id: Uuid,
        project_ids: &[Uuid],
    ) -> Result<Vec<Score>> {
        let scores = sqlx::query_as::<_, Score>(
            r#"
            SELECT score_id, judge_id, project_id, hackathon_id, criterion_values,
                   comments, is_draft, total_score, submitted_at
            FROM scores
            WHERE judge_id = $1 AND project_id = ANY($2)
            "#,
        )
        .bind(judge_id)
        .bind(project_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(scores)
    }

    /// Count of final scores the judge has submitted among the given
    /// projects; feeds the progress tracker
    pub async fn count_final_for_projects(
        &self,
        judge_id: Uuid,
        project_ids: &[Uuid],
    ) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM scores
            WHERE judge_id = $1 AND project_id = ANY($2) AND is_draft = false
            "#,
        )
        .bind(judge_id)
        .bind(project_ids)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }
}
