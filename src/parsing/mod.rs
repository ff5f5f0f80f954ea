//! Turning user text into triples

use crate::utils::geometry::Triple;

const BRACKETS: [char; 4] = ['(', ')', '[', ']'];
const PAIR_SEPARATORS: [char; 2] = [';', '|'];

/// Parses three integers out of free-form text
///
/// Brackets are dropped, then the text is split on commas. When that gives a
/// single token the text is split on whitespace instead. Each token must be an
/// `i64`, optionally signed, and there must be exactly three.
///
/// Accepts `3,4,5`, `(3,4,5)`, `[3, 4, 5]` and `3 4 5`.
///
/// # Example
/// ```
/// use eulerbrick::{parse_triple, Triple};
///
/// assert_eq!(parse_triple("(44, 117, 125)"), Some(Triple::new(44, 117, 125)));
/// assert_eq!(parse_triple("3,4"), None);
/// ```
pub fn parse_triple(text: &str) -> Option<Triple> {
    let cleaned: String = text.chars().filter(|c| !BRACKETS.contains(c)).collect();

    let mut tokens: Vec<&str> = cleaned.split(',').collect();
    if tokens.len() == 1 {
        tokens = cleaned.split_whitespace().collect();
    }

    let [a, b, c] = tokens.as_slice() else {
        return None;
    };

    Some(Triple::new(
        a.trim().parse().ok()?,
        b.trim().parse().ok()?,
        c.trim().parse().ok()?,
    ))
}

/// Splits one batch line into its two triples
///
/// The halves are separated by the first `;` or `|`, for example
/// `(44,117,125); (117,240,267)`.
pub fn split_pair_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(PAIR_SEPARATORS)
}

/// Parses one batch line into a pair of triples
pub fn parse_pair_line(line: &str) -> Option<(Triple, Triple)> {
    let (first, second) = split_pair_line(line)?;
    Some((parse_triple(first)?, parse_triple(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_styles() {
        let expected = Some(Triple::new(3, 4, 5));
        assert_eq!(parse_triple("3,4,5"), expected);
        assert_eq!(parse_triple("(3,4,5)"), expected);
        assert_eq!(parse_triple("[3, 4, 5]"), expected);
        assert_eq!(parse_triple("  ( 3 , 4 , 5 )  "), expected);
        assert_eq!(parse_triple("3 4 5"), expected);
        assert_eq!(parse_triple("3\t4   5"), expected);
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_triple("-3,+4,5"), Some(Triple::new(-3, 4, 5)));
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(parse_triple(""), None);
        assert_eq!(parse_triple("3,4"), None);
        assert_eq!(parse_triple("3,4,5,6"), None);
        assert_eq!(parse_triple("3 4"), None);
        assert_eq!(parse_triple("3,4,"), None);
    }

    #[test]
    fn test_non_integer_tokens() {
        assert_eq!(parse_triple("3,4,five"), None);
        assert_eq!(parse_triple("3.0,4,5"), None);
        assert_eq!(parse_triple("3, 4 4, 5"), None);
        assert_eq!(parse_triple("3,4,99999999999999999999"), None);
    }

    #[test]
    fn test_pair_line() {
        assert_eq!(
            parse_pair_line("(44,117,125); (117,240,267)"),
            Some((Triple::new(44, 117, 125), Triple::new(117, 240, 267)))
        );
        assert_eq!(
            parse_pair_line("6 8 10 | 8 15 17"),
            Some((Triple::new(6, 8, 10), Triple::new(8, 15, 17)))
        );
        assert_eq!(parse_pair_line("3,4,5"), None);
        assert_eq!(parse_pair_line("3,4,5; 3,4"), None);
    }
}
