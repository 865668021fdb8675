//! Core type definitions for fcompare

mod error;
mod line;
mod summary;

pub use error::FcompareError;
pub use line::Line;
pub use summary::DiffSummary;
