use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::criteria::RubricResponse};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::JudgeContext;

use super::services;

#[utoipa::path(
    get,
    path = "/api/hackathons/{hackathon_id}/criteria",
    params(
        ("hackathon_id" = Uuid, Path, description = "Hackathon ID")
    ),
    responses(
        (status = 200, description = "Ordered scoring rubric for the hackathon", body = RubricResponse),
        (status = 401, description = "Caller is not judge-eligible"),
        (status = 404, description = "Hackathon has no published rubric")
    ),
    tag = "criteria"
)]
pub async fn get_criteria(
    State(db): State<Database>,
    _ctx: JudgeContext,
    Path(hackathon_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let rubric = services::get_rubric(db.pool(), hackathon_id).await?;

    Ok(Json(rubric).into_response())
}
