use sqlx::PgPool;
use storage::{
    dto::criteria::{CriterionResponse, RubricResponse},
    error::Result,
    repository::criteria::CriteriaRepository,
};
use uuid::Uuid;

/// Load the published rubric for a hackathon
pub async fn get_rubric(pool: &PgPool, hackathon_id: Uuid) -> Result<RubricResponse> {
    let criteria = CriteriaRepository::new(pool)
        .get_rubric(hackathon_id)
        .await?;

    let weight_total = criteria.iter().map(|c| c.weight).sum();

    Ok(RubricResponse {
        hackathon_id,
        criteria: criteria.into_iter().map(CriterionResponse::from).collect(),
        weight_total,
    })
}
