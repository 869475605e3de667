//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry goes through [`normalize_word`], so lists can be mixed case.
//! Files ending in `.gz`/`.gzip` are gunzipped and `.zip` archives must hold
//! exactly one file.

use crate::core::MIN_WORD_LEN;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use zip::ZipArchive;

/// Uppercase a raw entry, rejecting anything a board could never spell
///
/// Returns `None` for entries shorter than [`MIN_WORD_LEN`] or containing
/// anything other than ASCII letters.
///
/// # Examples
/// ```
/// use bobble_solver::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word(" cat "), Some("CAT".to_string()));
/// assert_eq!(normalize_word("at"), None);
/// assert_eq!(normalize_word("don't"), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.len() < MIN_WORD_LEN || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Load words from a file, one per line
///
/// Plain text, gzip and single-file zip lists are accepted, chosen by file
/// extension. Invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened, is not valid
/// UTF-8 once decoded, or is a zip archive that does not hold exactly one file.
///
/// # Examples
/// ```no_run
/// use bobble_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let content = match extension.as_deref() {
        Some("gz" | "gzip") => read_gzip(path)?,
        Some("zip") => read_single_file_zip(path)?,
        _ => fs::read_to_string(path)?,
    };

    let words = words_from_lines(content.lines());
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to normalized words
///
/// # Examples
/// ```
/// use bobble_solver::wordlists::loader::words_from_slice;
/// use bobble_solver::wordlists::EMBEDDED;
///
/// let words = words_from_slice(EMBEDDED);
/// assert_eq!(words.len(), EMBEDDED.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn read_gzip(path: &Path) -> io::Result<String> {
    let mut content = String::new();
    GzDecoder::new(File::open(path)?).read_to_string(&mut content)?;
    Ok(content)
}

fn read_single_file_zip(path: &Path) -> io::Result<String> {
    let mut archive = ZipArchive::new(File::open(path)?).map_err(io::Error::other)?;
    if archive.len() != 1 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} holds {} entries, expected one file", path.display(), archive.len()),
        ));
    }

    let mut entry = archive.by_index(0).map_err(io::Error::other)?;
    if entry.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} holds a directory, expected one file", path.display()),
        ));
    }

    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.filter_map(normalize_word).collect()
}
