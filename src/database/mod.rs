pub mod connection;
pub mod matches;
pub mod models;
pub mod setup;
pub mod stats;
pub mod store;
pub mod teams;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use store::SqliteStore;
