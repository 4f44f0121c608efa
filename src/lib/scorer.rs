//! Picks the most title-like piece of a filename that was split on separators.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Words that mark a segment as channel or format boilerplate
const TAG_KEYWORDS: &[&str] = &["listening", "spanish", "audio", "podcast", "lecture", "mp3"];

const TITLE_WORD_BONUS: i64 = 5;
const TAG_PENALTY: i64 = 5;

/// ASCII letters plus the Latin-1 letters `À-Ö`, `Ø-ö` and `ø-ÿ`
pub fn is_latin_letter(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | 'À'..='Ö' | 'Ø'..='ö' | 'ø'..='ÿ')
}

/// Score a segment: one point per Latin letter, a bonus per capitalised word,
/// and a penalty per tag keyword it mentions.
pub fn score_segment(segment: &str) -> i64 {
    let letters = segment.chars().filter(|&c| is_latin_letter(c)).count() as i64;

    let title_words = WORD
        .find_iter(segment)
        .filter(|w| w.as_str().chars().next().is_some_and(char::is_uppercase))
        .count() as i64;

    let lower = segment.to_lowercase();
    let tags = TAG_KEYWORDS.iter().filter(|tag| lower.contains(*tag)).count() as i64;

    letters + title_words * TITLE_WORD_BONUS - tags * TAG_PENALTY
}

/// Choose the best segment, trimmed.
///
/// Highest score wins; on a tie the segment that sorts last as a string wins.
/// An empty slice gives an empty string.
pub fn choose_best_segment<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| (score_segment(s.as_ref()), s.as_ref().trim()))
        .max()
        .map(|(_, s)| s.to_string())
        .unwrap_or_default()
}
