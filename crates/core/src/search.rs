//! Case-insensitive substring search helpers.
//!
//! Searches are delegated to PostgreSQL `ILIKE`. User input is escaped so that
//! `%`, `_` and `\` match literally instead of acting as wildcards.

/// Escape character used in every `ILIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern that matches any value containing `term`.
///
/// Surrounding whitespace is trimmed. An empty term yields `%%`, which
/// matches every row.
///
/// # Examples
///
/// ```
/// use marquee_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop"), "%Hop%");
/// assert_eq!(contains_pattern(" 50% "), "%50\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let term = term.trim();
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
