use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("A room with this number already exists: {0}")]
    NumberAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
