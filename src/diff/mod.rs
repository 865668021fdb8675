//! Diff engine - line-set comparison and result emission

mod engine;
mod report;

pub use engine::{DiffEngine, EngineState};
pub use report::DiffWriter;
