//! Noise stripping for filename stems.
//!
//! Every function here is a pure `&str -> String` transform that never fails.
//! They are meant to be chained in a fixed order by [`crate::title`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Pictograph and symbol blocks that get deleted outright.
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F700}-\x{1F77F}",
        r"\x{1F780}-\x{1F7FF}",
        r"\x{1F800}-\x{1F8FF}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1FA00}-\x{1FA6F}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{2600}-\x{26FF}",
        r"\x{2700}-\x{27BF}",
        "]+"
    ))
    .unwrap()
});

static KNOWN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)how\s*to\s*spanish\s*podcast").unwrap());

static SQUARE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static TRAILING_PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]*\)\s*$").unwrap());
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

// Word characters are letters, digits and underscore. Combining marks such as
// the emoji variation selector do not count.
static LEADING_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\p{L}\p{N}_]+").unwrap());
static TRAILING_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+$").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Punctuation left dangling at either end after the other stages ran
const EDGE_PUNCTUATION: &[char] = &[' ', '-', '–', '—', '_', ':', ';', ',', '.'];

/// Remove the "How To Spanish Podcast" boilerplate, whatever its casing or spacing.
pub fn remove_known_tags(s: &str) -> String {
    KNOWN_TAG.replace_all(s, "").into_owned()
}

pub fn remove_emojis(s: &str) -> String {
    EMOJI.replace_all(s, "").into_owned()
}

/// Drop `[...]` groups anywhere, a single trailing `(...)` group, then any
/// remaining `(...)` groups. Inner parenthesised groups become a space so the
/// words on either side stay apart.
pub fn strip_brackets_and_parentheses(s: &str) -> String {
    let s = SQUARE_BRACKETS.replace_all(s, "");
    let s = TRAILING_PARENS.replace_all(&s, "");
    PARENS.replace_all(&s, " ").into_owned()
}

/// Remove the leading run of non-word characters (arrows, clocks, punctuation).
pub fn strip_leading_noise(s: &str) -> String {
    LEADING_NOISE.replace(s, "").into_owned()
}

pub fn strip_trailing_noise(s: &str) -> String {
    TRAILING_NOISE.replace(s, "").into_owned()
}

/// Collapse whitespace runs to one space, trim, then trim leftover separator
/// punctuation from both ends.
pub fn sanitize_whitespace_and_punct(s: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(s, " ");
    collapsed
        .trim()
        .trim_matches(EDGE_PUNCTUATION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_known_tags() {
        assert_eq!(remove_known_tags("How To Spanish Podcast: Ep 1"), ": Ep 1");
        assert_eq!(remove_known_tags("HOWTOSPANISHPODCAST x"), " x");
        assert_eq!(remove_known_tags("how  to\tspanish   podcast"), "");
        assert_eq!(remove_known_tags("Spanish Podcast"), "Spanish Podcast");
    }

    #[test]
    fn test_remove_emojis() {
        assert_eq!(remove_emojis("🎧 Episode 🔥"), " Episode ");
        assert_eq!(remove_emojis("\u{2600}\u{FE0F} sun"), "\u{FE0F} sun"); // variation selector is outside the ranges
        assert_eq!(remove_emojis("✅✨done"), "done");
        assert_eq!(remove_emojis("plain"), "plain");
        assert_eq!(remove_emojis("🚀🤖🪐"), "");
    }

    #[test]
    fn test_strip_brackets_and_parentheses() {
        assert_eq!(strip_brackets_and_parentheses("Title [HD] (128kbit AAC)"), "Title");
        assert_eq!(strip_brackets_and_parentheses("Title (Live)  "), "Title");
        assert_eq!(strip_brackets_and_parentheses("One(two)Three"), "One Three");
        assert_eq!(strip_brackets_and_parentheses("A (b) C (d)"), "A   C");
        assert_eq!(strip_brackets_and_parentheses("no groups"), "no groups");
        // an unclosed group is left alone
        assert_eq!(strip_brackets_and_parentheses("open (paren"), "open (paren");
    }

    #[test]
    fn test_strip_noise_edges() {
        assert_eq!(strip_leading_noise("⏰ -> Lesson 3"), "Lesson 3");
        assert_eq!(strip_leading_noise("_under"), "_under");
        assert_eq!(strip_leading_noise("Ñandú"), "Ñandú");
        assert_eq!(strip_leading_noise("\u{FE0F} Tema"), "Tema");
        assert_eq!(strip_trailing_noise("Lesson 3!!! ..."), "Lesson 3");
        assert_eq!(strip_trailing_noise("???"), "");
    }

    #[test]
    fn test_sanitize_whitespace_and_punct() {
        assert_eq!(sanitize_whitespace_and_punct("  a \t b\n c  "), "a b c");
        assert_eq!(sanitize_whitespace_and_punct("- Title; —"), "Title");
        assert_eq!(sanitize_whitespace_and_punct("__:Title:__"), "Title");
        assert_eq!(sanitize_whitespace_and_punct("Dr. Who."), "Dr. Who");
        assert_eq!(sanitize_whitespace_and_punct(" .,;: "), "");
    }

    #[test]
    fn test_transforms_are_idempotent() {
        let inputs = ["🎧 How To Spanish Podcast: Ep [x] (y)", "  --a--  ", "", "(a)(b)"];
        for input in inputs {
            let once = sanitize_whitespace_and_punct(input);
            assert_eq!(sanitize_whitespace_and_punct(&once), once);
            let once = remove_emojis(input);
            assert_eq!(remove_emojis(&once), once);
            let once = strip_leading_noise(input);
            assert_eq!(strip_leading_noise(&once), once);
        }
    }
}
