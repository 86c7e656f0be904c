use std::process::ExitCode;

use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = confpick::cli::Cli::parse();
    confpick::init(cli.verbose);

    confpick::cli::run(cli)
}
