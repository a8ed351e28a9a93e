pub mod room;
pub mod subject;
pub mod user;

pub use room::PostgresRoomRepository;
pub use subject::PostgresSubjectRepository;
pub use user::PostgresUserRepository;
