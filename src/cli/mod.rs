//! CLI command implementations

pub mod set;
pub mod show;
