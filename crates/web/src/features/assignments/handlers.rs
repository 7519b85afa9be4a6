use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::assignment::{AssignmentResponse, AssignmentSummary},
    services::progress::JudgeProgress,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::JudgeContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/assignments",
    responses(
        (status = 200, description = "All assignments for the calling judge", body = Vec<AssignmentSummary>),
        (status = 401, description = "Caller is not judge-eligible")
    ),
    tag = "assignments"
)]
pub async fn list_assignments(
    State(db): State<Database>,
    ctx: JudgeContext,
) -> Result<Response, WebError> {
    let assignments = services::list_assignments(db.pool(), ctx.judge_id).await?;

    Ok(Json(assignments).into_response())
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{hackathon_id}/assignment",
    params(
        ("hackathon_id" = Uuid, Path, description = "Hackathon ID")
    ),
    responses(
        (status = 200, description = "The judge's assignment with per-project score status", body = AssignmentResponse),
        (status = 401, description = "Caller is not judge-eligible"),
        (status = 404, description = "No assignment for this judge and hackathon")
    ),
    tag = "assignments"
)]
pub async fn get_assignment(
    State(db): State<Database>,
    ctx: JudgeContext,
    Path(hackathon_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let assignment = services::get_assignment(db.pool(), hackathon_id, ctx.judge_id).await?;

    Ok(Json(assignment).into_response())
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{hackathon_id}/progress",
    params(
        ("hackathon_id" = Uuid, Path, description = "Hackathon ID")
    ),
    responses(
        (status = 200, description = "Completion metrics for the judge's assignment", body = JudgeProgress),
        (status = 401, description = "Caller is not judge-eligible"),
        (status = 404, description = "No assignment for this judge and hackathon")
    ),
    tag = "assignments"
)]
pub async fn get_progress(
    State(db): State<Database>,
    ctx: JudgeContext,
    Path(hackathon_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let progress = services::get_progress(db.pool(), hackathon_id, ctx.judge_id).await?;

    Ok(Json(progress).into_response())
}
