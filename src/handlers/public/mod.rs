// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service description, health checks and token acquisition.

pub mod health;
pub mod user;

pub use health::{health, health_check, root};
pub use user::user_login;
