//! Batch orchestrator.
//!
//! Enumerates candidate files, classifies them, and runs every movie file
//! then every TV file through the resolver -> formatter -> applier pipeline.
//! Files are processed strictly one after another; a per-file failure is
//! reported and the batch continues unless strict mode is enabled.

use crate::core::applier::{Applier, Confirm, Outcome};
use crate::core::classifier;
use crate::core::formatter;
use crate::core::guesser;
use crate::core::resolver::{MetadataProvider, Resolver};
use crate::models::config::RunConfig;
use crate::models::media::{FileType, MediaFile, MediaType};
use crate::utils::fs;
use crate::{Error, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counts for the finished batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files whose action was applied (or announced in test mode).
    pub applied: usize,
    /// Files skipped or declined interactively, or dropped by language rules.
    pub skipped: usize,
    /// Per-file failures.
    pub failed: usize,
}

/// Collect candidate files from a recursive directory walk.
pub fn collect_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::ensure_directory(dir)?;

    let files = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    Ok(files)
}

/// Collect candidate files from a list file: one path per line, blank lines
/// ignored, no quoting.
pub fn collect_list_files(list: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(list)
        .map_err(|e| Error::InvalidListFile(format!("{}: {}", list.display(), e)))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Sort paths case-insensitively for deterministic ordering.
pub fn sort_files(files: &mut [PathBuf]) {
    files.sort_by_key(|p| p.to_string_lossy().to_lowercase());
}

fn report_error(err: &Error) {
    println!("{}", err.to_string().red().bold());
}

/// Sequences the per-file pipeline over a batch.
pub struct Orchestrator<P: MetadataProvider> {
    config: RunConfig,
    resolver: Resolver<P>,
    applier: Applier,
}

impl<P: MetadataProvider> Orchestrator<P> {
    pub fn new(config: RunConfig, provider: P) -> Self {
        let applier = Applier::new(&config);
        Self {
            config,
            resolver: Resolver::new(provider),
            applier,
        }
    }

    /// Run the batch over the supplied files.
    ///
    /// Files are sorted case-insensitively, classified, and partitioned;
    /// unknown files are silently dropped. All movie files are processed
    /// first, then all TV files.
    pub async fn run(
        &mut self,
        mut files: Vec<PathBuf>,
        mut confirmer: Option<&mut dyn Confirm>,
    ) -> Result<RunSummary> {
        sort_files(&mut files);

        let media: Vec<MediaFile> = files.iter().map(|p| classifier::classify(p)).collect();

        let movies: Vec<&MediaFile> = media
            .iter()
            .filter(|m| m.media_type == MediaType::Movie)
            .collect();
        let tv: Vec<&MediaFile> = media
            .iter()
            .filter(|m| m.media_type == MediaType::Tv)
            .collect();

        println!("movie files:");
        for m in &movies {
            println!("{}", m);
        }
        println!();

        println!("tv files:");
        for m in &tv {
            println!("{}", m);
        }
        println!();

        let mut summary = RunSummary::default();

        for m in movies.into_iter().chain(tv) {
            let confirmer = confirmer.as_deref_mut();
            match self.process_file(m, confirmer).await {
                Ok(Outcome::Applied) => summary.applied += 1,
                Ok(Outcome::Skipped) | Ok(Outcome::Declined) => summary.skipped += 1,
                Err(e) => {
                    // Strict mode surfaces the error to the caller, which
                    // reports it; printing here too would show it twice.
                    if self.config.strict {
                        return Err(e);
                    }
                    report_error(&e);
                    summary.failed += 1;
                }
            }
            println!();
        }

        Ok(summary)
    }

    /// Resolve, format, and apply one file.
    async fn process_file(
        &mut self,
        media: &MediaFile,
        confirmer: Option<&mut (dyn Confirm + '_)>,
    ) -> Result<Outcome> {
        let search = match &self.config.query {
            Some(q) => q.clone(),
            None => guesser::guess_title(media),
        };

        println!("{} file \"{}\"", media.media_type, media);
        println!("search \"{}\"", search);

        let language = match self.caption_language(media) {
            Ok(language) => language,
            Err(detected) => {
                println!(
                    "{}",
                    format!(
                        "skipping caption with language \"{}\" (wanted \"{}\")",
                        detected,
                        self.config.language.as_deref().unwrap_or_default()
                    )
                    .yellow()
                );
                return Ok(Outcome::Skipped);
            }
        };
        let language = language.as_deref();

        let new_name = match media.media_type {
            MediaType::Movie => {
                let info = self
                    .resolver
                    .resolve_movie(&search)
                    .await?
                    .ok_or_else(|| Error::NotFound(search.clone()))?;
                formatter::format_movie(&self.config.movie_format, &info, &media.path, language)
            }
            MediaType::Tv => {
                let info = self
                    .resolver
                    .resolve_series(&search)
                    .await?
                    .ok_or_else(|| Error::NotFound(search.clone()))?;

                // TV classification guarantees a season; the episode may
                // still be missing when only a season marker was found.
                let season = media
                    .season
                    .ok_or_else(|| Error::MissingEpisodeMarker(media.filename()))?;
                let episode = media
                    .episode
                    .ok_or_else(|| Error::MissingEpisodeMarker(media.filename()))?;

                formatter::format_tv(
                    &self.config.tv_format,
                    &info,
                    season,
                    episode,
                    &media.path,
                    language,
                )?
            }
            MediaType::Unknown => unreachable!("unknown files are filtered before processing"),
        };

        let new_path = media
            .path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(new_name);

        self.applier.apply(&media.path, &new_path, confirmer)
    }

    /// Effective caption language for formatting.
    ///
    /// With a preferred language configured, captions detected as a different
    /// language are skipped (`Err` carries the detected code); undetermined
    /// captions fall back to the preference. Videos never carry a language.
    fn caption_language(
        &self,
        media: &MediaFile,
    ) -> std::result::Result<Option<String>, &'static str> {
        if media.file_type != FileType::Caption {
            return Ok(None);
        }

        match (self.config.language.as_deref(), media.language) {
            (Some(wanted), Some(detected)) if !wanted.eq_ignore_ascii_case(detected) => {
                Err(detected)
            }
            (Some(_), Some(detected)) => Ok(Some(detected.to_string())),
            (Some(wanted), None) => Ok(Some(wanted.to_string())),
            (None, detected) => Ok(detected.map(str::to_string)),
        }
    }
}
