//! CLI command implementations

pub mod context;
pub mod status;
pub mod style;
