//! CLI library components for the Flourish form validator.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
