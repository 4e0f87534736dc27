// handlers/mod.rs - 3-Tier Handler Architecture
//
// Public (no auth) → Protected (JWT auth, any role) → Elevated (JWT auth, Overseer)
pub mod public;
pub mod protected;
pub mod elevated;
