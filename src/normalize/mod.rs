// src/normalize/mod.rs
pub mod role;
pub mod state;

pub use role::{resolve_role, RoleRule, RoleRules};
pub use state::normalize_state;
