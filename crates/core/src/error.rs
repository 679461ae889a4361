use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid report category number: {0}")]
    UnknownCategory(i64),

    #[error("Invalid fields for given report category: {}", .0.join(","))]
    InvalidFieldsForCategory(Vec<String>),

    #[error("{0}")]
    ReportRuleViolation(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether the error was caused by caller input and should surface as a
    /// 400-class response rather than a server fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Internal(_))
    }
}
