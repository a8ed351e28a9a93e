use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SubjectError {
    #[error("Subject not found: {0}")]
    NotFound(String),

    #[error("A subject with this name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
