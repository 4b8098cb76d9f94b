//! Token normalization.
//!
//! A token is normalized by removing every punctuation character and then
//! lowercasing what is left. The punctuation class is the union of the ASCII
//! punctuation set (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`) and the Unicode `P`
//! general category. Lowercasing uses the Unicode default case mapping and
//! never depends on the process locale.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[[:punct:]\p{P}]").unwrap());

/// Returns `true` if `c` belongs to the stripped punctuation class.
pub fn is_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}

/// Normalize a single token into its counting key.
///
/// The result may be empty when the token held nothing but punctuation.
///
/// # Examples
///
/// ```
/// use wordfreq_core::normalize::normalize;
///
/// assert_eq!(normalize("Hello,"), "hello");
/// assert_eq!(normalize("«Don't»"), "dont");
/// assert_eq!(normalize("--"), "");
/// ```
pub fn normalize(token: &str) -> String {
    let stripped: String = token.chars().filter(|&c| !is_punctuation(c)).collect();
    stripped.to_lowercase()
}

/// Split a chunk of text into whitespace-delimited tokens.
///
/// Whitespace is the Unicode `White_Space` property, so a no-break space
/// separates tokens while the ASCII information separators (U+001C..U+001F)
/// do not.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
