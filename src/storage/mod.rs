//! Storage layer for cashflow-report
//!
//! The only thing persisted is the rendered report, written atomically.

pub mod file_io;

pub use file_io::write_atomic;
