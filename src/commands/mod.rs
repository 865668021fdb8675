//! CLI command implementations

pub mod compare;
