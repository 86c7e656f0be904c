use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Create a sample config root for trying confpick by hand
    Fixture {
        #[arg(long, default_value = "conf")]
        root: PathBuf,
        /// Candidate directory names to create
        #[arg(value_delimiter = ',', default_value = "dev,staging,prod")]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest { profile, release } => run_nextest(profile, release)?,
        Commands::Fixture { root, names } => create_fixture(root, names)?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("nextest").arg("run").arg("--workspace");
    if let Some(profile) = profile {
        cmd.arg("--profile").arg(profile);
    }
    if release {
        cmd.arg("--release");
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("cargo nextest run failed");
    }
    Ok(())
}

fn create_fixture(root: PathBuf, names: Vec<String>) -> Result<()> {
    for name in names.iter().filter(|name| !name.trim().is_empty()) {
        let dir = root.join(name.trim());
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
        println!("created {}", dir.display());
    }
    Ok(())
}
