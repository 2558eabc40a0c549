//! Title guesser.
//!
//! Best-effort extraction of a search title from a raw filename by cutting
//! the token stream at the first season/episode marker or known noise token.
//! False positives are corrected by the `--query` override.

use crate::models::media::MediaFile;
use crate::utils::fs;
use once_cell::sync::Lazy;
use regex::Regex;

/// A token that is itself a season/episode marker, e.g. "s01" or "s01e02".
static MARKER_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^s\d+(?:e\d+)?$").expect("valid regex"));

/// Release tags, codecs, and container hints that never belong to a title.
const NOISE_TOKENS: &[&str] = &[
    // Resolutions
    "480p", "576p", "720p", "1080p", "2160p", "4k", "uhd",
    // Sources
    "bluray", "brrip", "bdrip", "webrip", "webdl", "web", "dl", "hdtv",
    "dvdrip", "dvd", "remux", "hdrip", "cam",
    // Codecs
    "x264", "x265", "h264", "h265", "hevc", "avc", "xvid", "divx", "av1",
    // Audio
    "aac", "ac3", "eac3", "dts", "truehd", "atmos", "flac", "mp3", "ddp",
    // Misc release tags
    "10bit", "8bit", "hdr", "hdr10", "dv", "proper", "repack", "internal",
    "extended", "unrated", "remastered", "complete", "multi",
    // Container hints
    "mkv", "mp4", "avi", "srt", "sub",
];

/// Guess a metadata search title for a classified file.
///
/// The filename stem is tokenized on non-alphanumeric boundaries and
/// lowercased; accumulation stops at the first season/episode token or noise
/// token. When nothing stops the scan the whole stem becomes the candidate.
pub fn guess_title(media: &MediaFile) -> String {
    let stem = fs::stem(&media.path);

    let mut words = Vec::new();
    for token in stem.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }

        let token = token.to_lowercase();
        if MARKER_TOKEN_RE.is_match(&token) || NOISE_TOKENS.contains(&token.as_str()) {
            break;
        }

        words.push(token);
    }

    words.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use std::path::PathBuf;

    fn guess(path: &str) -> String {
        guess_title(&classify(&PathBuf::from(path)))
    }

    #[test]
    fn test_stops_at_season_marker() {
        assert_eq!(guess("Breaking.Bad.S01E02.1080p.mkv"), "breaking bad");
        assert_eq!(guess("The Wire s03e01.mkv"), "the wire");
    }

    #[test]
    fn test_stops_at_noise_token() {
        assert_eq!(guess("Some.Movie.1080p.BluRay.mkv"), "some movie");
        assert_eq!(guess("Another Movie x265.mp4"), "another movie");
    }

    #[test]
    fn test_no_stop_token_uses_whole_stem() {
        assert_eq!(guess("Plain Movie Name.mkv"), "plain movie name");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(guess("show_name-here.S02E04.720p.mkv"), "show name here");
    }
}
