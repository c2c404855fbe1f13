//! Single-slot puzzle cache.
//!
//! Holds the most recently requested date's puzzle plus lazily-filled
//! enrichment. A request for any other date replaces the slot wholesale.

mod slot;

pub use slot::{CachedPuzzle, PuzzleCache};
