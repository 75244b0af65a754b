//! Update decision layer
//!
//! # Modules
//!
//! - [`checker`]: The decision engine comparing latest against current
//! - [`compare`]: Dotted-integer version ordering and formatting helpers

pub mod checker;
pub mod compare;
