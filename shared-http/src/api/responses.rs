use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Flask CI/CD Demo!";
pub const HEALTH_OK: &str = "ok";

/// Response body for GET /
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

impl HomeResponse {
    pub fn welcome() -> Self {
        Self {
            message: WELCOME_MESSAGE.into(),
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_OK.into(),
        }
    }
}
