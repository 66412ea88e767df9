pub mod import;
pub mod ranking;
pub mod server;
