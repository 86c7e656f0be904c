//! Config root scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::SelectionError;
use crate::domain::model::{CandidateOrder, Entry};
use crate::infra::config::Config;

/// Inputs for a single scan of the config root.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub root: PathBuf,
    pub order: CandidateOrder,
}

impl ScannerConfig {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            order: CandidateOrder::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.selector.root(),
            order: config.selector.order(),
        }
    }

    pub fn with_order(mut self, order: CandidateOrder) -> Self {
        self.order = order;
        self
    }
}

/// Result of scanning a config root.
#[derive(Debug)]
pub struct ScanResult {
    pub root: PathBuf,
    pub entries: Vec<Entry>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Creates the config root when missing and numbers the directories under it.
#[derive(Debug, Default)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan(&self, cfg: &ScannerConfig) -> Result<ScanResult, SelectionError> {
        ensure_root(&cfg.root)?;
        let entries = list_candidates(&cfg.root, cfg.order)?;
        tracing::debug!(
            root = %cfg.root.display(),
            order = cfg.order.as_str(),
            candidates = entries.len(),
            "scanned config root"
        );
        Ok(ScanResult {
            root: cfg.root.clone(),
            entries,
        })
    }
}

/// Create `root` and any missing parents. Safe to call repeatedly.
pub fn ensure_root(root: &Path) -> Result<(), SelectionError> {
    fs::create_dir_all(root).map_err(|source| SelectionError::DirectoryCreationFailed {
        path: root.to_path_buf(),
        source,
    })
}

/// List the immediate subdirectories of `root`, numbered from zero.
///
/// Symlinks to directories count as candidates. Entries that cannot be inspected are skipped.
pub fn list_candidates(root: &Path, order: CandidateOrder) -> Result<Vec<Entry>, SelectionError> {
    let read_dir = fs::read_dir(root).map_err(|source| SelectionError::DirectoryReadFailed {
        path: root.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for result in read_dir {
        match result {
            Ok(entry) => {
                let path = root.join(entry.file_name());
                if path.is_dir() {
                    paths.push(path);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, root = %root.display(), "skipping unreadable entry");
            }
        }
    }

    if order == CandidateOrder::Name {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| Entry { index, path })
        .collect())
}
