use async_trait::async_trait;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::NewRoom;
use crate::domain::room::models::Room;

/// Persistence operations for rooms.
#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
    async fn create(&self, room: NewRoom) -> Result<Room, RoomError>;
    async fn find_by_number(&self, number: &str) -> Result<Option<Room>, RoomError>;
    async fn list_all(&self) -> Result<Vec<Room>, RoomError>;
    async fn delete_by_number(&self, number: &str) -> Result<bool, RoomError>;
}
