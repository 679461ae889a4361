use civic_core::error::CoreError;

/// Error type for the persistence layer.
///
/// Wraps [`CoreError`] for rejected reports and lifecycle violations so the
/// caller can tell input problems apart from database faults.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `civic_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Whether this should be reported to the client as a 400-class error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, DbError::Core(core) if core.is_client_error())
    }
}
