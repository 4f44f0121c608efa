use std::path::Path;

/// Audio extensions picked up for renaming, without the leading dot.
/// Matching is case-insensitive.
pub const RENAME_EXTENSIONS: &[&str] = &["mp3", "m4a", "wav", "aac"];

/// Lowercased extension of a path, without the dot.
/// Returns an empty string when the path has no extension.
pub fn lowercase_extension<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Lowercased suffix including the dot (".mp3"), or empty when there is none.
/// This is what gets appended to a cleaned title.
pub fn lowercase_suffix<P: AsRef<Path>>(path: P) -> String {
    let ext = lowercase_extension(path);
    if ext.is_empty() {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Check if a file path has one of the renameable audio extensions
pub fn is_audio_file<P: AsRef<Path>>(path: P) -> bool {
    let ext = lowercase_extension(path);

    RENAME_EXTENSIONS
        .iter()
        .any(|&supported_ext| supported_ext == ext)
}
