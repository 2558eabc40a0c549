//! File system utilities.

use crate::Result;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase, with the leading dot.
pub fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Get the file name without its extension.
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Move a file, creating destination directories as needed.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Try rename first (fast, same filesystem)
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }

    // Fall back to copy + delete (cross filesystem)
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)?;
    Ok(())
}

/// Copy a file, creating destination directories as needed.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::copy(from, to)?;
    Ok(())
}

/// SHA-256 of a file's content as a lowercase hex string.
///
/// Returns an empty string when the source is unreadable so audit records
/// can still be written for missing files.
pub fn checksum(path: &Path) -> String {
    let mut file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return String::new(),
    };

    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(_) => return String::new(),
        }
    }

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_lowercased() {
        assert_eq!(extension(&PathBuf::from("Show.S01E02.MKV")), ".mkv");
        assert_eq!(extension(&PathBuf::from("show.srt")), ".srt");
        assert_eq!(extension(&PathBuf::from("noext")), "");
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem(&PathBuf::from("/a/b/Show.S01E02.mkv")), "Show.S01E02");
        assert_eq!(stem(&PathBuf::from("noext")), "noext");
    }

    #[test]
    fn test_checksum_missing_file_is_empty() {
        assert_eq!(checksum(&PathBuf::from("/nonexistent/file.mkv")), "");
    }

    #[test]
    fn test_checksum_stable() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a.bin");
        std::fs::write(&path, b"hello").unwrap();

        let first = checksum(&path);
        assert_eq!(first.len(), 64);
        assert_eq!(first, checksum(&path));
    }
}
