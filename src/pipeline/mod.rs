//! Word list pipeline stages
//!
//! Each stage is a pure transformation from one in-memory list to the next:
//! raw list → cleaner → cleaned list → selector (per puzzle) → exporter.
//! The compression step wraps the exported file for web delivery.

pub mod cleaner;
pub mod compress;
pub mod export;
pub mod selector;

pub use cleaner::{CleanOptions, CleanStats, clean};
pub use compress::{Artifact, Codec, compress_file};
pub use export::{export_to_file, export_to_vec};
pub use selector::select;
