pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;

pub use app::selector::{ConfigSelector, select_config_directory};
pub use domain::errors::SelectionError;

pub fn init(verbosity: u8) {
    infra::logging::init(verbosity);
}
