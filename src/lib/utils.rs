use crate::audio;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Characters rejected by at least one common filesystem
const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Make a name safe to use as a filename.
/// Drops the reserved characters and ASCII control codes, then trims whitespace.
pub fn make_safe_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c) && !('\x00'..='\x1f').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Audio files found under a directory, sorted by full path
pub struct FileScanResult {
    pub audio_files: Vec<PathBuf>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Scan a directory for renameable audio files.
///
/// Only the top level is listed unless `recursive` is set. The root itself
/// must be a readable directory; unreadable entries below it are skipped.
/// The returned paths are sorted so collision numbering is stable between runs.
pub fn scan_directory_for_audio_files(dir_path: &Path, recursive: bool) -> Result<FileScanResult> {
    let metadata = fs::metadata(dir_path)
        .with_context(|| format!("Failed to read directory '{}'", dir_path.display()))?;
    if !metadata.is_dir() {
        return Err(anyhow::anyhow!(
            "'{}' is not a directory",
            dir_path.display()
        ));
    }
    fs::read_dir(dir_path)
        .with_context(|| format!("Failed to list directory '{}'", dir_path.display()))?;

    let mut walker = WalkDir::new(dir_path).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut audio_files = Vec::new();
    let mut files_scanned = 0;
    let mut files_skipped = 0;

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.path().is_file() {
            continue;
        }

        files_scanned += 1;

        if audio::is_audio_file(entry.path()) {
            audio_files.push(entry.path().to_path_buf());
        } else {
            files_skipped += 1;
        }
    }

    audio_files.sort();
    debug!(
        "Scanned {} files in {} ({} audio, {} skipped)",
        files_scanned,
        dir_path.display(),
        audio_files.len(),
        files_skipped
    );

    Ok(FileScanResult {
        audio_files,
        files_scanned,
        files_skipped,
    })
}
