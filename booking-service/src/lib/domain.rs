pub mod room;
pub mod subject;
pub mod user;
