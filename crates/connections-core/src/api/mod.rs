//! Service implementation submodules.
//!
//! Each submodule contains `impl PuzzleService` blocks that extend the public
//! API with one concern. The struct definition remains in `lib.rs`.

mod builder;
mod enrichment;
mod puzzle;

pub use builder::PuzzleServiceBuilder;
