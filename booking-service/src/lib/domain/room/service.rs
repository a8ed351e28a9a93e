use std::sync::Arc;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::NewRoom;
use crate::domain::room::models::Room;
use crate::domain::room::ports::RoomRepository;

/// Domain service for room management.
pub struct RoomService {
    repository: Arc<dyn RoomRepository>,
}

impl RoomService {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        self.repository.list_all().await
    }

    pub async fn create_room(&self, room: NewRoom) -> Result<Room, RoomError> {
        if self
            .repository
            .find_by_number(&room.number)
            .await?
            .is_some()
        {
            return Err(RoomError::NumberAlreadyExists(room.number));
        }

        self.repository.create(room).await
    }

    pub async fn delete_room(&self, number: &str) -> Result<(), RoomError> {
        if self.repository.delete_by_number(number).await? {
            Ok(())
        } else {
            Err(RoomError::NotFound(number.to_string()))
        }
    }
}
