//! Go identifier validation.
//!
//! Follows the Go grammar rather than Rust's `char` predicates: a letter is
//! a character in one of the Unicode letter categories (Lu, Ll, Lt, Lm, Lo)
//! and a digit is a decimal number (Nd). Letter numbers such as `Ⅻ`, other
//! numbers such as `²`, and combining marks are not allowed.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Go's reserved words. None of them can name a package.
pub const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Returns `true` if `s` can be used as a Go package name.
///
/// The first character must be a letter (any script); the rest may be
/// letters, digits or `_`. Keywords are rejected.
///
/// # Examples
///
/// ```
/// use blobgen::ident::is_valid_identifier;
///
/// assert!(is_valid_identifier("assets"));
/// assert!(is_valid_identifier("ok12ßßมาก"));
/// assert!(!is_valid_identifier("has space"));
/// assert!(!is_valid_identifier("x²"));
/// assert!(!is_valid_identifier("type"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_letter(first) => {}
        _ => return false,
    }
    chars.all(|c| is_letter(c) || is_digit(c) || c == '_') && !is_keyword(s)
}

/// Unicode letter, as Go's `unicode.IsLetter`.
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Unicode decimal digit, as Go's `unicode.IsDigit`.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_ascii_letters_and_digits() {
        assert!(is_valid_identifier("ok12ßßมาก"));
        assert!(is_valid_identifier("foo_bar9"));
        assert!(is_valid_identifier("Ωmega"));
        assert!(is_valid_identifier("x٣"));
        assert!(is_valid_identifier("ǅx"));
    }

    #[test]
    fn rejects_separators_and_empty() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("/this"));
        assert!(!is_valid_identifier("this/"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("dash-ed"));
    }

    #[test]
    fn first_char_must_be_a_letter() {
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("_abc"));
        assert!(!is_valid_identifier("٣x"));
    }

    #[test]
    fn rejects_numbers_go_does_not_treat_as_digits() {
        assert!(!is_valid_identifier("x²"));
        assert!(!is_valid_identifier("Ⅻ"));
        assert!(!is_valid_identifier("a½"));
        assert!(!is_valid_identifier("xⅫ"));
    }

    #[test]
    fn rejects_combining_marks() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT.
        assert!(!is_valid_identifier("cafe\u{301}"));
        assert!(is_valid_identifier("caf\u{e9}"));
    }

    #[test]
    fn rejects_keywords() {
        for kw in KEYWORDS {
            assert!(!is_valid_identifier(kw), "{kw}");
        }
        assert!(is_valid_identifier("types"));
        assert!(is_valid_identifier("Type"));
        assert!(is_valid_identifier("string"));
    }

    #[test]
    fn letter_and_digit_classes() {
        assert!(is_letter('a') && is_letter('Z') && is_letter('ß') && is_letter('ม'));
        assert!(!is_letter('_') && !is_letter('1') && !is_letter('Ⅻ'));
        assert!(is_digit('7') && is_digit('٣'));
        assert!(!is_digit('²') && !is_digit('½') && !is_digit('a'));
    }
}
