pub mod health;
pub mod home;

pub use health::health_check;
pub use home::home;
