//! Heuristic title extraction from noisy audio filenames.
//!
//! A stem like `🎧 How To Spanish Podcast: Episode 12 🔥` goes through a fixed
//! pipeline of noise stripping, then either separator segmentation or an
//! all-caps prefix drop, then final cleanup. The result is always safe to use
//! as a filename.

use crate::noise;
use crate::scorer::{self, is_latin_letter};
use crate::utils::make_safe_filename;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Separators that trigger segmentation when found anywhere in the stem
const SEGMENT_MARKERS: &[&str] = &[" - ", " — ", " – ", ":"];

static SEGMENT_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s[-—–:]\s").unwrap());

/// A short all-caps leading token such as "SPANISH" or "ENGLISH"
static CAPS_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]{2,20})(\s+.+)$").unwrap());

fn count_latin_letters(s: &str) -> usize {
    s.chars().filter(|&c| is_latin_letter(c)).count()
}

/// Split on separators and keep the most title-like segment.
fn pick_segment(s: &str) -> String {
    let segments: Vec<&str> = SEGMENT_SPLIT.split(s).collect();
    scorer::choose_best_segment(&segments)
}

/// Drop a leading all-caps token when the rest carries more letters than it.
fn drop_caps_prefix(s: &str) -> String {
    let Some(caps) = CAPS_PREFIX.captures(s) else {
        return s.to_string();
    };

    let prefix = &caps[1];
    let candidate = caps[2].trim();
    if count_latin_letters(candidate) > count_latin_letters(prefix) {
        candidate.to_string()
    } else {
        s.to_string()
    }
}

/// Extract a clean title from a filename stem (no extension).
///
/// Never fails and is deterministic. The result never contains characters
/// that are illegal in filenames. It is only empty when the stem holds
/// nothing but illegal or control characters.
pub fn extract_title(stem: &str) -> String {
    let s = stem.replace('_', " ");
    let s = noise::remove_emojis(&s);
    let s = noise::remove_known_tags(&s);
    let s = noise::strip_brackets_and_parentheses(&s);
    let s = noise::strip_leading_noise(&s);

    let s = if SEGMENT_MARKERS.iter().any(|m| s.contains(m)) {
        pick_segment(&s)
    } else {
        drop_caps_prefix(&s)
    };

    let s = noise::remove_emojis(&s);
    let s = noise::sanitize_whitespace_and_punct(&s);
    let s = noise::strip_trailing_noise(&s);
    let mut title = make_safe_filename(&s);

    if title.is_empty() {
        title = make_safe_filename(stem);
    }

    debug!("Extracted title {:?} from {:?}", title, stem);
    title
}
