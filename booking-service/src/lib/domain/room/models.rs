/// Bookable room.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub capacity: i32,
    pub kind: String,
}

/// Fields of a room that does not exist yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub number: String,
    pub capacity: i32,
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub i64);
