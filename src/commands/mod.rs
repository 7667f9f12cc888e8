//! Command implementations

pub mod clean;
pub mod compress;
pub mod filter;
pub mod query;

pub use clean::{CleanConfig, CleanReport, run_clean};
pub use compress::{CompressConfig, CompressReport, run_compress};
pub use filter::{FilterConfig, FilterReport, run_filter};
pub use query::run_query;
