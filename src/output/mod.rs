//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_clean_report, print_compress_report, print_filter_report};
