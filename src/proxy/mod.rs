//! Proxy node resolution layer
//!
//! # Modules
//!
//! - [`resolver`]: Ranked mirror endpoint resolution with TTL cache and static fallback
//! - [`store`]: Cache slot persistence for the ranked node list

pub mod resolver;
pub mod store;
