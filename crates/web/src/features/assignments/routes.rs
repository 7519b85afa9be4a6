use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_assignment, get_progress, list_assignments};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/assignments", get(list_assignments))
        .route("/hackathons/:hackathon_id/assignment", get(get_assignment))
        .route("/hackathons/:hackathon_id/progress", get(get_progress))
}
