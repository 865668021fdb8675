//! # fcompare - Fast Line-Level File Comparison
//!
//! Reports the lines that differ between two text files - the symmetric
//! difference over each file's set of distinct lines - and prints nothing
//! when they match. Built around a capacity-tunable hash set so comparisons
//! stay fast on files with tens of millions of lines.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod hash;
pub mod reader;
pub mod set;
pub mod types;

// Re-export commonly used types
pub use config::Tuning;
pub use diff::DiffEngine;
pub use set::LineSet;
pub use types::{DiffSummary, FcompareError, Line};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
