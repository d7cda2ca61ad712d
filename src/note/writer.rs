//! Note file writing.
//!
//! Writes through a temp file in the target directory so a note is either
//! fully present or absent, and resolves name conflicts with numbered
//! suffixes instead of overwriting.

use crate::error::{NotatError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check whether a note with this filename already exists.
pub fn note_exists(dir: &Path, filename: &str) -> bool {
    dir.join(filename).exists()
}

/// Write a note into `dir` and return the path written.
///
/// With `overwrite` set, an existing note of the same name is replaced.
/// Otherwise a ` (1)`, ` (2)`, ... suffix is appended until a free name is
/// found.
pub fn write_note(dir: &Path, filename: &str, content: &str, overwrite: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = if overwrite {
        dir.join(filename)
    } else {
        available_path(dir, filename)
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(&path)
        .map_err(|e| NotatError::Note(format!("Could not persist {}: {}", path.display(), e)))?;

    debug!("Wrote note to {}", path.display());

    Ok(path)
}

/// First free path for `filename` in `dir`, adding numbered suffixes.
fn available_path(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    if !path.exists() {
        return path;
    }

    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{}", ext)),
        None => (filename, String::new()),
    };

    let mut n = 1;
    loop {
        let candidate = dir.join(format!("{} ({}){}", stem, n, extension));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
