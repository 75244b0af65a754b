//! Release information layer
//!
//! # Modules
//!
//! - [`fetcher`]: Ordered-fallback fetching across candidate sources
//! - [`source`]: Candidate source list with per-source adapter kinds
//! - [`types`]: Canonical release record shapes

pub mod fetcher;
pub mod source;
pub mod types;
