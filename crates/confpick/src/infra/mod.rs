//! Infrastructure adapters for settings and diagnostics.

pub mod config;
pub mod logging;
