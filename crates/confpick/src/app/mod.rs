//! Application layer orchestrating domain logic and infrastructure.

pub mod prompt;
pub mod scan;
pub mod selector;
