pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
