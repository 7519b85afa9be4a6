use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_criteria;

pub fn routes() -> Router<Database> {
    Router::new().route("/hackathons/:hackathon_id/criteria", get(get_criteria))
}
