use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{ComputeTotalRequest, ComputeTotalResponse, ScoreResponse, UpsertScoreRequest},
    services::aggregation::ProjectAggregate,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::JudgeContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/score",
    params(
        ("project_id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "The judge's score for the project, or null when none has been saved", body = Option<ScoreResponse>),
        (status = 401, description = "Caller is not judge-eligible")
    ),
    tag = "scores"
)]
pub async fn get_score(
    State(db): State<Database>,
    ctx: JudgeContext,
    Path(project_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let score = services::get_score(db.pool(), ctx.judge_id, project_id).await?;

    Ok(Json(score).into_response())
}

#[utoipa::path(
    put,
    path = "/api/projects/{project_id}/score",
    params(
        ("project_id" = Uuid, Path, description = "Project ID")
    ),
    request_body = UpsertScoreRequest,
    responses(
        (status = 200, description = "Score saved, echoing the computed weighted total", body = ScoreResponse),
        (status = 400, description = "Validation failed for a final submission"),
        (status = 401, description = "Caller is not judge-eligible"),
        (status = 404, description = "Project or rubric not found")
    ),
    tag = "scores"
)]
pub async fn upsert_score(
    State(db): State<Database>,
    ctx: JudgeContext,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<UpsertScoreRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let score = services::upsert_score(db.pool(), ctx.judge_id, project_id, &payload).await?;

    Ok(Json(score).into_response())
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/aggregate",
    params(
        ("project_id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Mean of final scores across judges; average_score is null when no final score exists", body = ProjectAggregate),
        (status = 401, description = "Caller is not judge-eligible"),
        (status = 404, description = "Project not found")
    ),
    tag = "scores"
)]
pub async fn get_aggregate(
    State(db): State<Database>,
    _ctx: JudgeContext,
    Path(project_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let aggregate = services::get_aggregate(db.pool(), project_id).await?;

    Ok(Json(aggregate).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scores/compute-total",
    request_body = ComputeTotalRequest,
    responses(
        (status = 200, description = "Weighted total for the given values, nothing persisted", body = ComputeTotalResponse),
        (status = 401, description = "Caller is not judge-eligible"),
        (status = 404, description = "Hackathon has no published rubric")
    ),
    tag = "scores"
)]
pub async fn compute_total(
    State(db): State<Database>,
    _ctx: JudgeContext,
    Json(payload): Json<ComputeTotalRequest>,
) -> Result<Response, WebError> {
    let total_score = services::compute_total(
        db.pool(),
        payload.hackathon_id,
        &payload.criterion_values,
    )
    .await?;

    Ok(Json(ComputeTotalResponse { total_score }).into_response())
}
