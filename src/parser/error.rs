use crate::lexer::{LexError, Token, TokenKind};

use thiserror::Error as ThisError;

/// A 1-based line/column source location.
///
/// Tokens only carry byte offsets; a `Pos` is recovered by scanning the
/// source prefix and counting newlines. That scan is O(n), so it happens
/// exclusively on the error path, never during normal tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
}

impl Pos {
    pub fn locate(text: &str, offset: usize) -> Pos {
        let mut line = 1;
        let mut col = 1;
        for c in text[..offset.min(text.len())].chars() {
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        Pos { line, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {ch:?} at {pos}")]
    UnexpectedCharacter { ch: char, pos: Pos },

    #[error("unterminated string at {pos}")]
    UnterminatedString { pos: Pos },

    #[error("syntax error at {pos}: unexpected {kind} `{value}` - {message}")]
    Syntax {
        kind: TokenKind,
        value: String,
        pos: Pos,
        message: &'static str,
    },

    #[error("endpoint `{path}` already exists (redeclared at {pos})")]
    DuplicateEndpoint { path: String, pos: Pos },

    #[error("text size limit exceeded - limit: {limit}, text size: {text_size}")]
    TextSizeLimitExceeded { limit: usize, text_size: usize },
}

impl ParseError {
    pub(crate) fn syntax(text: &str, tok: Token<'_>, message: &'static str) -> ParseError {
        ParseError::Syntax {
            kind: tok.kind,
            value: tok.text.to_string(),
            pos: Pos::locate(text, tok.start),
            message,
        }
    }

    pub(crate) fn lex(text: &str, err: LexError) -> ParseError {
        match err {
            LexError::UnterminatedString { offset } => ParseError::UnterminatedString {
                pos: Pos::locate(text, offset),
            },
            LexError::UnexpectedCharacter { ch, offset } => ParseError::UnexpectedCharacter {
                ch,
                pos: Pos::locate(text, offset),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_start() {
        assert_eq!(Pos::locate("abc", 0), Pos { line: 1, col: 1 });
    }

    #[test]
    fn locate_counts_newlines() {
        let text = "ab\ncd\nef";
        assert_eq!(Pos::locate(text, 3), Pos { line: 2, col: 1 });
        assert_eq!(Pos::locate(text, 7), Pos { line: 3, col: 2 });
    }

    #[test]
    fn display_is_one_based() {
        let pos = Pos::locate("x", 1);
        assert_eq!(pos.to_string(), "line 1, column 2");
    }
}
