//! Command line argument definitions.

use crate::core::applier::Action;
use crate::core::formatter;
use crate::models::config::RunConfig;
use crate::utils::lang;
use crate::{Error, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Media Renamer - rename video and caption files from TMDB metadata
#[derive(Parser, Debug)]
#[command(name = "media-renamer")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "list"])))]
pub struct Cli {
    /// Input directory (walked recursively)
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// File containing a list of paths, one per line
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Format template for TV files
    #[arg(long, value_name = "TEMPLATE", long_help = formatter::TEMPLATE_HELP)]
    pub tv_format: String,

    /// Format template for movie files
    #[arg(long, value_name = "TEMPLATE", long_help = formatter::TEMPLATE_HELP)]
    pub movie_format: String,

    /// What to do with each file
    #[arg(short, long, value_enum, default_value_t = Action::Test)]
    pub action: Action,

    /// Search query override applied to every file
    #[arg(short, long, value_name = "STRING")]
    pub query: Option<String>,

    /// Ask for confirmation before each action
    #[arg(long)]
    pub interactive: bool,

    /// Base directory for display-relative paths
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Preferred caption language code (e.g. eng); mismatching captions are skipped
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Abort the batch on the first per-file failure
    #[arg(long)]
    pub strict: bool,

    /// Don't write audit records for test-mode actions
    #[arg(long)]
    pub no_audit_dry_run: bool,

    /// Path of the append-only audit log
    #[arg(long, value_name = "FILE", default_value = "history")]
    pub history: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check flag values clap cannot validate itself. A bad value here is a
    /// configuration failure, fatal before any file is processed.
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.language {
            if !lang::is_known_code(code) {
                return Err(Error::UnknownLanguage(code.clone()));
            }
        }
        Ok(())
    }

    /// Assemble the run configuration.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            action: self.action,
            tv_format: self.tv_format.clone(),
            movie_format: self.movie_format.clone(),
            query: self.query.clone(),
            strict: self.strict,
            audit_dry_runs: !self.no_audit_dry_run,
            language: self.language.clone(),
            root: self.root.clone(),
            history_path: self.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_and_list_are_exclusive() {
        let result = Cli::try_parse_from([
            "media-renamer",
            "--input",
            "/in",
            "--list",
            "files.txt",
            "--tv-format",
            "%T",
            "--movie-format",
            "%T",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_one_source_required() {
        let result = Cli::try_parse_from([
            "media-renamer",
            "--tv-format",
            "%T",
            "--movie-format",
            "%T",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from([
            "media-renamer",
            "--input",
            "/in",
            "--tv-format",
            "%T - S%sE%e - %t",
            "--movie-format",
            "%T (%Y)",
        ])
        .unwrap();

        let config = cli.run_config();
        assert_eq!(config.action, Action::Test);
        assert!(config.audit_dry_runs);
        assert!(!config.strict);
        assert_eq!(config.history_path, PathBuf::from("history"));
    }

    #[test]
    fn test_unknown_language_code_rejected() {
        let cli = Cli::try_parse_from([
            "media-renamer",
            "--input",
            "/in",
            "--tv-format",
            "%T",
            "--movie-format",
            "%T",
            "--language",
            "xx",
        ])
        .unwrap();
        assert!(matches!(cli.validate(), Err(Error::UnknownLanguage(_))));
    }

    #[test]
    fn test_known_language_code_accepted() {
        let cli = Cli::try_parse_from([
            "media-renamer",
            "--input",
            "/in",
            "--tv-format",
            "%T",
            "--movie-format",
            "%T",
            "--language",
            "fre",
        ])
        .unwrap();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_invalid_action_rejected() {
        let result = Cli::try_parse_from([
            "media-renamer",
            "--input",
            "/in",
            "--tv-format",
            "%T",
            "--movie-format",
            "%T",
            "--action",
            "shred",
        ]);
        assert!(result.is_err());
    }
}
