// handlers/elevated/mod.rs - Elevated handlers (Overseer role required)
//
// Mage writes. Routed behind jwt_auth_middleware and require_overseer.

pub mod mage;

pub use mage::{mage_create, mage_get, mage_update};
