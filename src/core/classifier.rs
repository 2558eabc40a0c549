//! Filename classifier.
//!
//! Determines the file kind (video/caption/unknown), extracts season and
//! episode markers, and detects caption languages. Pure functions over the
//! filename, no filesystem access.

use crate::models::media::{FileType, MediaFile, MediaType};
use crate::utils::lang;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Pattern for season markers with an optional episode part, e.g. S01, S01E02.
static SEASON_EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S(\d+)(?:E(\d+))?").expect("valid regex"));

/// MIME types guessed from common media extensions.
const MIME_TYPES: &[(&str, &str)] = &[
    ("mkv", "video/x-matroska"),
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("wmv", "video/x-ms-wmv"),
    ("webm", "video/webm"),
    ("mpg", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("ts", "video/mp2t"),
    ("m2ts", "video/mp2t"),
    ("flv", "video/x-flv"),
    ("ogv", "video/ogg"),
    ("3gp", "video/3gpp"),
    ("mp3", "audio/mpeg"),
    ("flac", "audio/flac"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("nfo", "text/plain"),
    ("txt", "text/plain"),
];

/// Guess a MIME type from the extension.
fn guess_mime(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// Determine the file type from the extension / MIME guess.
pub fn file_type(path: &Path) -> FileType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "srt" | "sub" => return FileType::Caption,
        "mkv" => return FileType::Video,
        _ => {}
    }

    match guess_mime(&ext) {
        Some(mime) if mime.starts_with("video/") => FileType::Video,
        _ => FileType::Unknown,
    }
}

/// Extract season and episode numbers from a filename.
///
/// All non-overlapping `S<digits>[E<digits>]` matches are collected; scanning
/// from the end of the string backward, the first match carrying both season
/// and episode wins. If no match has an episode part, the season of the last
/// match is returned with the episode unset.
pub fn season_episode(filename: &str) -> (Option<u32>, Option<u32>) {
    let matches: Vec<(u32, Option<u32>)> = SEASON_EPISODE_RE
        .captures_iter(filename)
        .filter_map(|caps| {
            let season = caps.get(1)?.as_str().parse().ok()?;
            let episode = caps.get(2).and_then(|m| m.as_str().parse().ok());
            Some((season, episode))
        })
        .collect();

    if let Some((season, episode)) = matches.iter().rev().find(|(_, e)| e.is_some()) {
        return (Some(*season), *episode);
    }

    match matches.last() {
        Some((season, _)) => (Some(*season), None),
        None => (None, None),
    }
}

/// Detect a caption language from filename tokens.
///
/// Tokens are scanned in reverse order so the language tag, which usually
/// sits right before the extension, is found before any coincidental match
/// in the title.
fn caption_language(filename: &str) -> Option<&'static str> {
    let stem = filename.rsplit_once('.').map(|(s, _)| s).unwrap_or(filename);

    stem.split(|c: char| !c.is_alphanumeric())
        .rev()
        .filter(|t| !t.is_empty())
        .find_map(lang::code_for_token)
}

/// Classify a path into a [`MediaFile`].
///
/// Video and caption files with a season marker are TV files; without one
/// they are movies. Anything else is unknown and excluded from processing.
pub fn classify(path: &Path) -> MediaFile {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_type = file_type(path);
    let (season, episode) = season_episode(&filename);

    let media_type = match file_type {
        FileType::Video | FileType::Caption => {
            if season.is_some() {
                MediaType::Tv
            } else {
                MediaType::Movie
            }
        }
        FileType::Unknown => MediaType::Unknown,
    };

    let language = match file_type {
        FileType::Caption => caption_language(&filename),
        _ => None,
    };

    let (season, episode) = match media_type {
        MediaType::Tv => (season, episode),
        _ => (None, None),
    };

    MediaFile {
        path: path.to_path_buf(),
        file_type,
        media_type,
        season,
        episode,
        language,
    }
}
