//! CLI library components for the AGE-PRO catalog builder.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
