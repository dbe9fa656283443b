pub mod responses;

pub use responses::{HEALTH_OK, HealthResponse, HomeResponse, WELCOME_MESSAGE};
