use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::room::models::NewRoom;
use crate::domain::room::models::Room;
use crate::inbound::http::guards::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RoomResponseData>>, ApiError> {
    let rooms = state.room_service.list_rooms().await?;

    if rooms.is_empty() {
        return Err(ApiError::NotFound("No rooms found".to_string()));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        rooms.iter().map(RoomResponseData::from).collect(),
    ))
}

pub async fn create_room(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<CreateRoomRequestBody>,
) -> Result<ApiSuccess<RoomResponseData>, ApiError> {
    let room = state
        .room_service
        .create_room(NewRoom {
            number: body.number,
            capacity: body.capacity,
            kind: body.kind,
        })
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        RoomResponseData::from(&room),
    ))
}

pub async fn delete_room(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<DeleteRoomRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state.room_service.delete_room(&body.number).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: format!("Room '{}' deleted successfully", body.number),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRoomRequestBody {
    number: String,
    capacity: i32,
    kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteRoomRequestBody {
    number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomResponseData {
    pub id: i64,
    pub number: String,
    pub capacity: i32,
    pub kind: String,
}

impl From<&Room> for RoomResponseData {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.0,
            number: room.number.clone(),
            capacity: room.capacity,
            kind: room.kind.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}
