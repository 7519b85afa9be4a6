use sqlx::PgPool;
use storage::{
    dto::score::{ScoreResponse, UpsertScoreRequest},
    error::{Result, StorageError},
    repository::{
        criteria::CriteriaRepository, project::ProjectRepository, score::ScoreRepository,
    },
    services::{
        aggregation::{self, ProjectAggregate},
        scoring,
    },
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// The judge's existing score for a project, with the total rederived
/// from the stored values and the current rubric. `None` simply means the
/// judge has not saved anything yet.
pub async fn get_score(
    pool: &PgPool,
    judge_id: Uuid,
    project_id: Uuid,
) -> Result<Option<ScoreResponse>> {
    let Some(mut score) = ScoreRepository::new(pool)
        .find_by_judge_and_project(judge_id, project_id)
        .await?
    else {
        return Ok(None);
    };

    // The cached column survives rubric edits; recompute when possible
    match CriteriaRepository::new(pool).get_rubric(score.hackathon_id).await {
        Ok(rubric) => {
            score.total_score = scoring::calculate_total_score(score.values(), &rubric);
        }
        Err(StorageError::NotFound) => {}
        Err(e) => return Err(e),
    }

    Ok(Some(score.into()))
}

/// Create or overwrite the judge's score record for a project
///
/// Draft saves always persist, with validation left advisory to the UI.
/// Final submissions run the validator first and nothing is written when
/// it reports issues.
pub async fn upsert_score(
    pool: &PgPool,
    judge_id: Uuid,
    project_id: Uuid,
    payload: &UpsertScoreRequest,
) -> WebResult<ScoreResponse> {
    let project = ProjectRepository::new(pool).find_by_id(project_id).await?;
    if project.hackathon_id != payload.hackathon_id {
        return Err(WebError::BadRequest(
            "Project does not belong to the given hackathon".to_string(),
        ));
    }

    let rubric = CriteriaRepository::new(pool)
        .get_rubric(payload.hackathon_id)
        .await?;

    if !payload.is_draft {
        let report = scoring::validate_score(&payload.criterion_values, &rubric);
        if !report.is_valid() {
            return Err(WebError::ScoreValidation(report));
        }
    }

    let total_score = scoring::calculate_total_score(&payload.criterion_values, &rubric);

    let score = ScoreRepository::new(pool)
        .upsert(
            judge_id,
            project_id,
            payload.hackathon_id,
            &payload.criterion_values,
            payload.comments.as_deref(),
            payload.is_draft,
            total_score,
        )
        .await?;

    Ok(score.into())
}

/// Cross-judge aggregate for a project, recomputed from final scores
pub async fn get_aggregate(pool: &PgPool, project_id: Uuid) -> Result<ProjectAggregate> {
    // 404 for projects that do not exist at all; a project with no final
    // scores still aggregates, to "no data"
    ProjectRepository::new(pool).find_by_id(project_id).await?;

    aggregation::aggregate_project(pool, project_id).await
}

/// Live weighted total for a partially filled sheet; never persisted
pub async fn compute_total(
    pool: &PgPool,
    hackathon_id: Uuid,
    values: &std::collections::HashMap<String, i32>,
) -> Result<Decimal> {
    let rubric = CriteriaRepository::new(pool).get_rubric(hackathon_id).await?;

    Ok(scoring::calculate_total_score(values, &rubric))
}
