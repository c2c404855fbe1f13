//! Data models for the Connections backend.
//!
//! These models map directly to the JSON shapes the browser game consumes
//! and the upstream puzzle service produces.

mod date;
mod puzzle;
mod responses;
mod upstream;

pub use date::*;
pub use puzzle::*;
pub use responses::*;
pub use upstream::*;
