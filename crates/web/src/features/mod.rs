pub mod assignments;
pub mod criteria;
pub mod scores;

use axum::Router;
use storage::Database;

pub fn routes() -> Router<Database> {
    Router::new()
        .merge(criteria::routes::routes())
        .merge(assignments::routes::routes())
        .merge(scores::routes::routes())
}
