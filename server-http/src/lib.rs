pub mod handlers;
pub mod routes;
pub mod server;

// Re-export key types
pub use routes::{build_app, build_router, App};
pub use server::{serve, serve_with_shutdown};
