use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Project;

pub struct ProjectRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT project_id, hackathon_id, title, description, submitted_at
            FROM projects
            WHERE project_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(project)
    }

    /// Fetch the projects named by an assignment, preserving submission order
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT project_id, hackathon_id, title, description, submitted_at
            FROM projects
            WHERE project_id = ANY($1)
            ORDER BY submitted_at, project_id
            "#,
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        Ok(projects)
    }
}
