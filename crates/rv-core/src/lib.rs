//! rv-core: stable foundation for routeviz.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RvError, RvResult};
pub use numeric::*;
