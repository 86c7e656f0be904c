//! Domain models for candidate directories and the operator's choice.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A directory found directly under the config root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub index: usize,
    pub path: PathBuf,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.path.display())
    }
}

/// The entry the operator picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub path: PathBuf,
}

impl Selection {
    /// The selected path rendered the same way it appeared in the menu.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl From<Entry> for Selection {
    fn from(entry: Entry) -> Self {
        Self {
            index: entry.index,
            path: entry.path,
        }
    }
}

/// How candidates are ordered before they are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum CandidateOrder {
    /// Whatever order the platform's directory listing yields.
    #[default]
    #[value(alias = "fs")]
    Filesystem,
    /// Ascending by file name.
    Name,
}

impl CandidateOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::Name => "name",
        }
    }
}

impl std::str::FromStr for CandidateOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "filesystem" | "fs" => Ok(Self::Filesystem),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown candidate order: {other}")),
        }
    }
}
