//! Media-related data models.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// File kind derived from the extension / MIME guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Video,
    Caption,
    Unknown,
}

/// Media category derived from file type and season markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Tv,
    Unknown,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
            MediaType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A classified media file.
///
/// Built once by the classifier and never mutated afterwards. A `Tv` file
/// always carries a season; the episode may be absent if only a season
/// marker was found in the filename.
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// Full path as supplied by the caller.
    pub path: PathBuf,
    /// Video, caption, or unknown.
    pub file_type: FileType,
    /// Movie, TV, or unknown (unknown files are dropped from processing).
    pub media_type: MediaType,
    /// Season number extracted from the filename.
    pub season: Option<u32>,
    /// Episode number extracted from the filename.
    pub episode: Option<u32>,
    /// ISO-639-2 language code detected for captions.
    pub language: Option<&'static str>,
}

impl MediaFile {
    /// File name component, lossily decoded.
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for MediaFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Resolved movie metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieInfo {
    pub title: String,
    pub year: Option<u16>,
}

/// Per-episode metadata within a resolved series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeInfo {
    pub title: String,
}

/// Resolved series metadata with a season -> episode -> info mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesInfo {
    pub title: String,
    pub year: Option<u16>,
    pub episodes: BTreeMap<u32, BTreeMap<u32, EpisodeInfo>>,
}

impl SeriesInfo {
    /// Look up an episode, validating both season and episode exist.
    pub fn episode(&self, season: u32, episode: u32) -> Option<&EpisodeInfo> {
        self.episodes.get(&season)?.get(&episode)
    }
}
