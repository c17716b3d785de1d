/// Domain-level errors shared across the workspace.
///
/// HTTP mapping lives in the API crate; this enum stays transport-free.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by id or slug found nothing.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A database constraint rejected the write (e.g. duplicate slug).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
