//! The config directory selector: scan the root, ask the operator, return the choice.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::app::prompt::{self, NO_CANDIDATES, Prompter};
use crate::app::scan::{Scanner, ScannerConfig};
use crate::domain::errors::SelectionError;
use crate::domain::model::Selection;

/// Ties a scan of the config root to an interactive choice.
#[derive(Debug)]
pub struct ConfigSelector {
    scanner: Scanner,
    config: ScannerConfig,
}

impl ConfigSelector {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            scanner: Scanner::new(),
            config,
        }
    }

    /// Run the selection against the process console.
    ///
    /// Stdin and stdout stay locked until this returns.
    pub fn select(&self) -> Result<Selection, SelectionError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.select_with(stdin.lock(), stdout.lock())
    }

    /// Run the selection with caller-provided console handles.
    ///
    /// When the root holds no directories the "no configs" line is written and
    /// [`SelectionError::NoCandidatesFound`] is returned without reading input.
    pub fn select_with<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<Selection, SelectionError> {
        let scan = self.scanner.scan(&self.config)?;
        let mut prompter = Prompter::new(reader, writer);

        if scan.is_empty() {
            let out = prompter.writer_mut();
            writeln!(out, "{NO_CANDIDATES}")?;
            out.flush()?;
            return Err(SelectionError::NoCandidatesFound { root: scan.root });
        }

        prompt::render_menu(&scan.entries, prompter.writer_mut())?;
        let index = prompter.read_choice(scan.entries.len())?;

        let selection = Selection::from(scan.entries[index].clone());
        tracing::debug!(index, path = %selection.path.display(), "config selected");
        Ok(selection)
    }
}

/// Ask the operator to choose a directory under `root` and return its path.
pub fn select_config_directory(root: &Path) -> Result<String, SelectionError> {
    let selector = ConfigSelector::new(ScannerConfig::from_root(root));
    selector.select().map(|selection| selection.display_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::io::Cursor;

    use crate::domain::model::CandidateOrder;

    fn selector_for(root: &Path) -> ConfigSelector {
        ConfigSelector::new(ScannerConfig::from_root(root).with_order(CandidateOrder::Name))
    }

    fn run(selector: &ConfigSelector, input: &str) -> (Result<Selection, SelectionError>, String) {
        let mut out = Vec::new();
        let result = selector.select_with(Cursor::new(input.to_owned()), &mut out);
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn picks_second_of_three() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("conf");
        for name in ["A", "B", "C"] {
            fs::create_dir_all(root.join(name)).unwrap();
        }

        let (result, out) = run(&selector_for(&root), "1\n");

        let selection = result.unwrap();
        assert_eq!(selection.path, root.join("B"));
        assert_eq!(selection.index, 1);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Choose a number:");
        assert_eq!(lines[1], format!("0 {}", root.join("A").display()));
        assert_eq!(lines[2], format!("1 {}", root.join("B").display()));
        assert_eq!(lines[3], format!("2 {}", root.join("C").display()));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_root_is_terminal_and_reads_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("conf");

        let (result, out) = run(&selector_for(&root), "0\n");

        assert!(matches!(
            result,
            Err(SelectionError::NoCandidatesFound { root: ref r }) if *r == root
        ));
        assert_eq!(out, "No Config files found\n");
        assert!(root.is_dir());
    }

    #[test]
    fn bad_input_does_not_relist_candidates() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("conf");
        for name in ["A", "B", "C"] {
            fs::create_dir_all(root.join(name)).unwrap();
        }

        let (result, out) = run(&selector_for(&root), "abc\n5\n2\n");

        assert_eq!(result.unwrap().path, root.join("C"));
        assert_eq!(out.matches("Choose a number:").count(), 1);
        assert_eq!(out.matches("Invalid number, try again:").count(), 1);
        assert_eq!(out.matches("No config for that number, try again:").count(), 1);
        assert_eq!(out.matches(&format!("0 {}", root.join("A").display())).count(), 1);
    }

    #[test]
    fn contract_reports_empty_root_without_reading_stdin() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("fresh/conf");

        let result = select_config_directory(&root);

        assert!(matches!(
            result,
            Err(SelectionError::NoCandidatesFound { root: ref r }) if *r == root
        ));
        assert!(root.is_dir());
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("conf");
        fs::create_dir_all(root.join("only")).unwrap();

        let (result, _) = run(&selector_for(&root), "");

        assert!(matches!(result, Err(SelectionError::InputStreamExhausted)));
    }
}
