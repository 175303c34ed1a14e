//! Line and query tokenization.
//!
//! Both the index builder and the scan backend see text through the same
//! function, so a line's tokens at build time and at scan time are identical.
//! That is what lets the two backends agree on every query.
//!
//! The rules are deliberately small:
//!
//! 1. Lowercase the whole input
//! 2. Treat whitespace and `. , ! ?` as separators
//! 3. Split on maximal runs of separators, dropping empty segments
//!
//! Dropping empty segments covers leading and trailing separators for free:
//! `"  Hello, world!  "` yields `["hello", "world"]`.

/// Characters that separate tokens.
pub const SEPARATORS: &[char] = &[' ', '\t', '\n', '\r', '.', ',', '!', '?'];

/// Word boundary detection: checks if character is a token separator.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Tokenize text into lowercase tokens in left-to-right order.
///
/// Never fails. Empty input, or input made only of separators, yields an
/// empty vector.
///
/// # Example
///
/// ```
/// use linedex::tokenize;
///
/// assert_eq!(tokenize("The Brown FoX."), vec!["the", "brown", "fox"]);
/// assert!(tokenize(" ,.!? ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize and deduplicate, keeping first-occurrence order.
///
/// Query evaluation only cares whether a token is present, so `"fox fox"`
/// and `"fox"` are the same query.
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut tokens = tokenize(text);
    let mut seen = std::collections::HashSet::with_capacity(tokens.len());
    tokens.retain(|token| seen.insert(token.clone()));
    tokens
}
