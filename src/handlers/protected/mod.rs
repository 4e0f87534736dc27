// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Read-only endpoints open to every authenticated role.

pub mod house;
pub mod mage;
pub mod user;

pub use house::house_list;
pub use mage::{mage_list_get, mage_list_post};
pub use user::token_validation;
