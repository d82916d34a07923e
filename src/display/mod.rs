//! Display formatting for terminal output
//!
//! The rendered documents live in `export`; this module covers what is
//! printed to stdout.

pub mod report;

pub use report::{format_bar, format_insights, truncate};
