//! Command-line surface for the `confpick` binary.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::app::scan::ScannerConfig;
use crate::app::selector::ConfigSelector;
use crate::domain::errors::SelectionError;
use crate::domain::model::CandidateOrder;
use crate::infra::config::Config;

#[derive(Parser, Debug)]
#[command(name = "confpick", author, version, about = "Choose a configuration directory by number", long_about = None)]
pub struct Cli {
    /// Directory whose subdirectories are offered (defaults to `conf`).
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Order in which candidates are numbered.
    #[arg(short, long, value_enum)]
    pub order: Option<CandidateOrder>,

    /// Increase log verbosity on stderr (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Fold command-line flags over the loaded configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(root) = &self.root {
            config.selector.set_root(root.clone());
        }
        if let Some(order) = self.order {
            config.selector.set_order(order);
        }
        config
    }
}

/// Execute the parsed command line.
///
/// An empty config root is reported on stdout and ends the program successfully.
pub fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "confpick", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.apply(Config::load().context("failed to load confpick settings")?);
    let selector = ConfigSelector::new(ScannerConfig::from_config(&config));

    match selector.select() {
        Ok(selection) => {
            println!("{}", selection.display_path());
            Ok(ExitCode::SUCCESS)
        }
        Err(SelectionError::NoCandidatesFound { root }) => {
            tracing::info!(root = %root.display(), "nothing to choose from");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(err).context("config selection failed"),
    }
}
