use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::NewRoom;
use crate::domain::room::models::Room;
use crate::domain::room::models::RoomId;
use crate::domain::room::ports::RoomRepository;

pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i64,
    number: String,
    capacity: i32,
    kind: String,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId(row.id),
            number: row.number,
            capacity: row.capacity,
            kind: row.kind,
        }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn create(&self, room: NewRoom) -> Result<Room, RoomError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO rooms (number, capacity, kind)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&room.number)
        .bind(room.capacity)
        .bind(&room.kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return RoomError::NumberAlreadyExists(room.number.clone());
                }
            }
            RoomError::DatabaseError(e.to_string())
        })?;

        Ok(Room {
            id: RoomId(id),
            number: room.number,
            capacity: room.capacity,
            kind: room.kind,
        })
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Room>, RoomError> {
        let row = sqlx::query_as::<_, RoomRow>(
            "SELECT id, number, capacity, kind FROM rooms WHERE number = $1",
        )
        .bind(number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        Ok(row.map(Room::from))
    }

    async fn list_all(&self) -> Result<Vec<Room>, RoomError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            "SELECT id, number, capacity, kind FROM rooms ORDER BY number",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn delete_by_number(&self, number: &str) -> Result<bool, RoomError> {
        let result = sqlx::query("DELETE FROM rooms WHERE number = $1")
            .bind(number)
            .execute(&self.pool)
            .await
            .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
