//! Just enough of a Go lexer to find a `package` clause.
//!
//! Comments, string literals and rune literals are skipped whole so that
//! the word `package` inside them never counts.

use crate::ident::{is_digit, is_keyword, is_letter};

/// A Go token as far as package detection cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The `package` keyword.
    Package,
    /// An identifier that is not a keyword.
    Ident(String),
    /// Other keywords, literals, operators and punctuation.
    Other,
}

/// Iterator over the tokens of a Go source text.
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokens { rest: src }
    }

    fn skip_trivia(&mut self) {
        loop {
            self.rest = self.rest.trim_start();
            if let Some(body) = self.rest.strip_prefix("//") {
                self.rest = body.find('\n').map_or("", |i| &body[i..]);
            } else if let Some(body) = self.rest.strip_prefix("/*") {
                self.rest = body.find("*/").map_or("", |i| &body[i + 2..]);
            } else {
                return;
            }
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.skip_trivia();
        let first = self.rest.chars().next()?;

        if is_word_start(first) {
            let end = self
                .rest
                .find(|c: char| !is_word_start(c) && !is_digit(c))
                .unwrap_or(self.rest.len());
            let word = &self.rest[..end];
            self.rest = &self.rest[end..];
            return Some(match word {
                "package" => Token::Package,
                _ if is_keyword(word) => Token::Other,
                _ => Token::Ident(word.to_string()),
            });
        }

        let body = &self.rest[first.len_utf8()..];
        self.rest = match first {
            '"' | '\'' => skip_quoted(body, first),
            '`' => body.find('`').map_or("", |i| &body[i + 1..]),
            // 0x1F, 1e9, 3.14i: one token, never an identifier.
            c if c.is_ascii_digit() => {
                let end = body
                    .find(|c: char| !c.is_ascii_alphanumeric() && c != '.' && c != '_')
                    .unwrap_or(body.len());
                &body[end..]
            }
            _ => body,
        };
        Some(Token::Other)
    }
}

/// Go letters include the underscore.
fn is_word_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Skips an interpreted string or rune literal whose opening quote has
/// already been consumed. Unterminated literals end at the line break.
fn skip_quoted(body: &str, quote: char) -> &str {
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return &body[i..],
            c if c == quote => return &body[i + c.len_utf8()..],
            _ => {}
        }
    }
    ""
}

/// Returns the name from the first well-formed `package` clause in `src`.
///
/// A `package` keyword not directly followed by an identifier is ignored
/// and scanning carries on, so a later clause can still match.
pub fn scan_for_package(src: &str) -> Option<String> {
    let mut want_name = false;
    for token in Tokens::new(src) {
        match token {
            Token::Ident(name) if want_name => return Some(name),
            Token::Package => want_name = true,
            _ => want_name = false,
        }
    }
    None
}
