//! Action applier.
//!
//! Announces the planned transformation, optionally asks for confirmation,
//! performs the move/copy, and appends an audit record. The action is a
//! construction-time choice and never changes during a run.

use crate::core::history::{self, HistoryRecord};
use crate::models::config::RunConfig;
use crate::utils::fs;
use crate::{Error, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// What to do with each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    Test,
    Move,
    Copy,
}

impl Action {
    /// Lower-case name used in output and audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Test => "test",
            Action::Move => "move",
            Action::Copy => "copy",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of applying an action to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action was performed (or announced, in test mode) and logged.
    Applied,
    /// The user chose to skip; the file counts as handled, nothing logged.
    Skipped,
    /// The user declined; not an error.
    Declined,
}

/// Confirmation response in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Skip,
}

/// Injected confirmation strategy so the applier is testable without a TTY.
pub trait Confirm {
    fn confirm(&mut self) -> Result<Confirmation>;
}

/// Interactive confirmation on standard input.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self) -> Result<Confirmation> {
        let stdin = std::io::stdin();
        loop {
            print!("[y]es, [n]o, [s]kip: ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;

            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(Confirmation::Yes),
                "n" | "no" => return Ok(Confirmation::No),
                "s" | "skip" => return Ok(Confirmation::Skip),
                _ => println!("invalid option"),
            }
        }
    }
}

/// Applies the configured action to individual files.
pub struct Applier {
    action: Action,
    audit_dry_runs: bool,
    history_path: PathBuf,
    root: Option<PathBuf>,
}

impl Applier {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            action: config.action,
            audit_dry_runs: config.audit_dry_runs,
            history_path: config.history_path.clone(),
            root: config.root.clone(),
        }
    }

    /// Path as displayed to the user, relative to the configured root.
    fn display(&self, path: &Path) -> String {
        match &self.root {
            Some(root) => path
                .strip_prefix(root)
                .unwrap_or(path)
                .display()
                .to_string(),
            None => path.display().to_string(),
        }
    }

    /// Apply the configured action to one file.
    ///
    /// The planned transformation is always announced first. In interactive
    /// mode the injected strategy decides: yes proceeds, no declines the file,
    /// skip treats it as handled without touching the filesystem. Outside of
    /// test mode the source must exist and is moved or copied (destination
    /// directories are created as needed). Every applied action is appended
    /// to the audit log; test mode appends too unless dry-run auditing is
    /// disabled.
    pub fn apply(
        &self,
        old: &Path,
        new: &Path,
        confirmer: Option<&mut (dyn Confirm + '_)>,
    ) -> Result<Outcome> {
        println!(
            "[{}] \"{}\" >> \"{}\"",
            self.action.as_str().bold(),
            self.display(old),
            self.display(new)
        );

        if let Some(confirmer) = confirmer {
            match confirmer.confirm()? {
                Confirmation::Yes => {}
                Confirmation::No => return Ok(Outcome::Declined),
                Confirmation::Skip => return Ok(Outcome::Skipped),
            }
        }

        if self.action != Action::Test {
            if !old.exists() {
                return Err(Error::SourceMissing(old.display().to_string()));
            }

            match self.action {
                Action::Move => fs::move_file(old, new)?,
                Action::Copy => fs::copy_file(old, new)?,
                Action::Test => unreachable!(),
            }
        }

        if self.action != Action::Test || self.audit_dry_runs {
            // After a move the content lives at the destination; hash it
            // there so move records still carry a usable checksum.
            let hashed = match self.action {
                Action::Move => new,
                Action::Test | Action::Copy => old,
            };
            let record = HistoryRecord {
                action: self.action.as_str().to_string(),
                checksum: fs::checksum(hashed),
                old_path: old.display().to_string(),
                new_path: new.display().to_string(),
            };
            history::append(&self.history_path, &record)?;
        }

        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::RunConfig;
    use tempfile::TempDir;

    struct FixedConfirm(Confirmation);

    impl Confirm for FixedConfirm {
        fn confirm(&mut self) -> Result<Confirmation> {
            Ok(self.0)
        }
    }

    fn config(dir: &TempDir, action: Action) -> RunConfig {
        RunConfig {
            action,
            history_path: dir.path().join("history"),
            ..Default::default()
        }
    }

    #[test]
    fn test_test_action_never_mutates() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("a.mkv");
        let new = dir.path().join("b.mkv");
        std::fs::write(&old, b"data").unwrap();

        let applier = Applier::new(&config(&dir, Action::Test));
        let outcome = applier.apply(&old, &new, None).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert!(old.exists());
        assert!(!new.exists());

        // Exactly one audit record with the planned destination.
        let log = std::fs::read_to_string(dir.path().join("history")).unwrap();
        assert_eq!(log.lines().count(), 1);
        assert!(log.starts_with("test,"));
        assert!(log.contains(&new.display().to_string()));
    }

    #[test]
    fn test_test_action_audit_disabled() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("a.mkv");
        std::fs::write(&old, b"data").unwrap();

        let mut cfg = config(&dir, Action::Test);
        cfg.audit_dry_runs = false;

        let applier = Applier::new(&cfg);
        applier
            .apply(&old, &dir.path().join("b.mkv"), None)
            .unwrap();

        assert!(!dir.path().join("history").exists());
    }

    #[test]
    fn test_move_action() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("a.mkv");
        let new = dir.path().join("sub").join("b.mkv");
        std::fs::write(&old, b"data").unwrap();

        let applier = Applier::new(&config(&dir, Action::Move));
        applier.apply(&old, &new, None).unwrap();

        assert!(!old.exists());
        assert!(new.exists());

        let log = std::fs::read_to_string(dir.path().join("history")).unwrap();
        assert!(log.starts_with("move,"));
        // Moved files are hashed at the destination.
        assert!(!log.starts_with("move,,"));
    }

    #[test]
    fn test_copy_action() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("a.mkv");
        let new = dir.path().join("b.mkv");
        std::fs::write(&old, b"data").unwrap();

        let applier = Applier::new(&config(&dir, Action::Copy));
        applier.apply(&old, &new, None).unwrap();

        assert!(old.exists());
        assert!(new.exists());
    }

    #[test]
    fn test_missing_source_is_per_file_error() {
        let dir = TempDir::new().unwrap();
        let applier = Applier::new(&config(&dir, Action::Move));

        let err = applier
            .apply(&dir.path().join("gone.mkv"), &dir.path().join("b.mkv"), None)
            .unwrap_err();
        assert!(matches!(err, Error::SourceMissing(_)));
        assert!(!dir.path().join("history").exists());
    }

    #[test]
    fn test_declined_and_skipped() {
        let dir = TempDir::new().unwrap();
        let old = dir.path().join("a.mkv");
        std::fs::write(&old, b"data").unwrap();
        let new = dir.path().join("b.mkv");

        let applier = Applier::new(&config(&dir, Action::Move));

        let mut no = FixedConfirm(Confirmation::No);
        assert_eq!(
            applier.apply(&old, &new, Some(&mut no)).unwrap(),
            Outcome::Declined
        );

        let mut skip = FixedConfirm(Confirmation::Skip);
        assert_eq!(
            applier.apply(&old, &new, Some(&mut skip)).unwrap(),
            Outcome::Skipped
        );

        // Neither touched the filesystem or the log.
        assert!(old.exists());
        assert!(!new.exists());
        assert!(!dir.path().join("history").exists());
    }
}
