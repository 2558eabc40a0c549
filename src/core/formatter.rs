//! Name formatter.
//!
//! Substitutes recognized placeholder tokens in a user template with resolved
//! metadata. Unrecognized tokens pass through unchanged so templates can
//! carry literal text.
//!
//! Recognized placeholders:
//! - `%T` movie/show title
//! - `%Y` movie/show year
//! - `%t` episode title
//! - `%s` season number (zero-padded to 2)
//! - `%e` episode number (zero-padded to 2)

use crate::models::media::{MovieInfo, SeriesInfo};
use crate::utils::fs;
use crate::{Error, Result};
use std::path::Path;

pub const TITLE: &str = "%T";
pub const YEAR: &str = "%Y";
pub const EPISODE_TITLE: &str = "%t";
pub const SEASON: &str = "%s";
pub const EPISODE: &str = "%e";

/// Help text listing the recognized placeholders.
pub const TEMPLATE_HELP: &str = "\
%T : movie/show title
%Y : movie/show year
%t : episode title
%s : season number
%e : episode number";

/// Lowercased extension of the source file, with the caption language code
/// inserted before it when one was determined (e.g. `.eng.srt`).
fn output_extension(old_path: &Path, language: Option<&str>) -> String {
    let extension = fs::extension(old_path);
    match language {
        Some(code) => format!(".{}{}", code, extension),
        None => extension,
    }
}

fn year_field(year: Option<u16>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

/// Build a movie filename from a template.
pub fn format_movie(
    template: &str,
    movie: &MovieInfo,
    old_path: &Path,
    language: Option<&str>,
) -> String {
    let new = template
        .replace(TITLE, &movie.title)
        .replace(YEAR, &year_field(movie.year));

    format!("{}{}", new, output_extension(old_path, language))
}

/// Build a TV episode filename from a template.
///
/// The file's season and episode must exist in the resolved series episode
/// mapping; a miss is a validation failure for this file.
pub fn format_tv(
    template: &str,
    show: &SeriesInfo,
    season: u32,
    episode: u32,
    old_path: &Path,
    language: Option<&str>,
) -> Result<String> {
    if !show.episodes.contains_key(&season) {
        return Err(Error::SeasonNotFound(season));
    }
    let info = show
        .episode(season, episode)
        .ok_or(Error::EpisodeNotFound { season, episode })?;

    let new = template
        .replace(TITLE, &show.title)
        .replace(YEAR, &year_field(show.year))
        .replace(EPISODE_TITLE, &info.title)
        .replace(SEASON, &format!("{:02}", season))
        .replace(EPISODE, &format!("{:02}", episode));

    Ok(format!("{}{}", new, output_extension(old_path, language)))
}
