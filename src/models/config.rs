//! Run configuration model.

use crate::core::applier::Action;
use std::path::PathBuf;

/// Settings for a single rename run, assembled from CLI arguments.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// What to do with each file.
    pub action: Action,
    /// Format template for TV files.
    pub tv_format: String,
    /// Format template for movie files.
    pub movie_format: String,
    /// Search query override applied to every file in the run.
    pub query: Option<String>,
    /// Abort the batch on the first per-file failure.
    pub strict: bool,
    /// Whether test-mode actions are written to the audit log.
    pub audit_dry_runs: bool,
    /// Preferred caption language code; mismatching captions are skipped.
    pub language: Option<String>,
    /// Base directory for display-relative paths.
    pub root: Option<PathBuf>,
    /// Path of the append-only audit log.
    pub history_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            action: Action::Test,
            tv_format: "%T - S%sE%e - %t".to_string(),
            movie_format: "%T (%Y)".to_string(),
            query: None,
            strict: false,
            audit_dry_runs: true,
            language: None,
            root: None,
            history_path: PathBuf::from("history"),
        }
    }
}
