//! Domain types shared by the selector and its callers.

pub mod errors;
pub mod model;
