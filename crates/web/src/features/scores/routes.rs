use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{compute_total, get_aggregate, get_score, upsert_score};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/projects/:project_id/score", get(get_score).put(upsert_score))
        .route("/projects/:project_id/aggregate", get(get_aggregate))
        .route("/scores/compute-total", post(compute_total))
}
