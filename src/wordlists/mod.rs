//! Word list file access
//!
//! Loading is the only concern here; writing goes through the exporter so
//! every persisted list gets the same compact encoding.

pub mod loader;

pub use loader::load_from_file;
