use thiserror::Error;

/// Errors surfaced by the judging store. `NotFound` doubles as the normal
/// "nothing to judge" signal for assignments and rubrics; callers decide
/// whether it is an empty state or a 404.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database failure: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failure: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Record not found")]
    NotFound,

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// A score upsert referencing a project or hackathon that was deleted
    /// out from under the judge lands here (Postgres 23503).
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;

    #[derive(Debug)]
    struct PgViolation {
        code: &'static str,
    }

    impl std::fmt::Display for PgViolation {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "violates constraint (code {})", self.code)
        }
    }

    impl StdError for PgViolation {}

    impl sqlx::error::DatabaseError for PgViolation {
        fn message(&self) -> &str {
            "violates constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.code {
                "23503" => sqlx::error::ErrorKind::ForeignKeyViolation,
                "23505" => sqlx::error::ErrorKind::UniqueViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn database_error(code: &'static str) -> StorageError {
        StorageError::Database(sqlx::Error::Database(Box::new(PgViolation { code })))
    }

    #[test]
    fn foreign_key_code_is_detected() {
        assert!(database_error("23503").is_foreign_key_violation());
    }

    #[test]
    fn other_errors_are_not_foreign_key_violations() {
        assert!(!database_error("23505").is_foreign_key_violation());
        assert!(!StorageError::NotFound.is_foreign_key_violation());
        assert!(!StorageError::ConstraintViolation("x".to_string()).is_foreign_key_violation());
    }
}
