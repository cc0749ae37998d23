//! The lexer is the first step in the parsing process.
//!
//! Its input is schema source text and its output is a pull-based stream of
//! classified tokens, each carrying the exact source substring it was lexed
//! from and its start/end byte offsets. The lexer never discards anything:
//! whitespace and comments are tokens like everything else, and the parser
//! decides where they are significant.

use thiserror::Error as ThisError;

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Comment,
    Identifier,
    Whitespace,
    Dash,
    Colon,
    OpenCurly,
    CloseCurly,
    Question,
    OpenBracket,
    CloseBracket,
    Slash,
    String,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Eof => "eof",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Dash => "dash",
            TokenKind::Colon => "colon",
            TokenKind::OpenCurly => "open_curly",
            TokenKind::CloseCurly => "close_curly",
            TokenKind::Question => "question",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::Slash => "slash",
            TokenKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A single lexed token. `text` borrows directly from the source, so tokens
/// are cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[derive(Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Lexer<'a> {
        Lexer { text, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn bump_if(&mut self, want: char) -> bool {
        match self.peek_char() {
            Some(c) if c == want => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, f: F) {
        while let Some(c) = self.peek_char() {
            if !f(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token {
            kind,
            text: &self.text[start..self.pos],
            start,
            end: self.pos,
        }
    }

    /// Returns the next token, or a [`TokenKind::Eof`] token once the input
    /// is exhausted. Lexing is fully synchronous and never blocks.
    pub fn next(&mut self) -> Result<Token<'a>, LexError> {
        let start = self.pos;
        let c = match self.bump() {
            Some(c) => c,
            None => return Ok(self.token(TokenKind::Eof, start)),
        };

        use TokenKind::*;
        let kind = match c {
            ' ' | '\t' | '\r' | '\n' => {
                self.take_while(is_space);
                Whitespace
            }
            '-' => Dash,
            ':' => Colon,
            '?' => Question,
            '{' => OpenCurly,
            '}' => CloseCurly,
            '[' => OpenBracket,
            ']' => CloseBracket,
            '/' => Slash,
            '#' => {
                self.rest_comment();
                Comment
            }
            '"' => {
                self.rest_string(start)?;
                String
            }
            c if c.is_alphabetic() => {
                self.take_while(|c| c.is_alphanumeric());
                Identifier
            }
            _ => return Err(LexError::UnexpectedCharacter { ch: c, offset: start }),
        };

        Ok(self.token(kind, start))
    }

    /// Reads the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token<'a>, LexError> {
        let saved = self.pos;
        let tok = self.next();
        self.pos = saved;
        tok
    }

    /// Rewinds exactly one character. This is a narrow escape hatch, not
    /// general backtracking; multi-character tokens cannot be un-lexed.
    pub fn backup(&mut self) {
        if self.pos == 0 {
            return;
        }
        let mut i = self.pos - 1;
        while !self.text.is_char_boundary(i) {
            i -= 1;
        }
        self.pos = i;
    }

    // A comment token is a run of one or more `#`-led lines. The run
    // continues across a single newline plus horizontal whitespace; a blank
    // line or any non-comment content ends it. The leading `#` has already
    // been consumed on entry.
    fn rest_comment(&mut self) {
        loop {
            self.take_while(|c| c != '\n');
            let line_end = self.pos;

            if !self.bump_if('\n') {
                // comment ran to end of input
                return;
            }
            self.take_while(|c| matches!(c, ' ' | '\t' | '\r'));
            if !self.bump_if('#') {
                self.pos = line_end;
                return;
            }
        }
    }

    // The opening quote has already been consumed. A backslash escapes the
    // following character; escapes are consumed but not interpreted.
    fn rest_string(&mut self, start: usize) -> Result<(), LexError> {
        loop {
            match self.bump() {
                None => return Err(LexError::UnterminatedString { offset: start }),
                Some('"') => return Ok(()),
                Some('\\') => {
                    _ = self.bump();
                }
                Some(_) => continue,
            }
        }
    }
}

/// Iterator adapter over [`Lexer`]: yields tokens until eof, then `None`.
/// A lex error is yielded once and ends the stream.
#[derive(Clone)]
pub struct LexerIter<'a> {
    done: bool,
    lexer: Lexer<'a>,
}

impl<'a> LexerIter<'a> {
    pub fn new(text: &'a str) -> LexerIter<'a> {
        LexerIter {
            done: false,
            lexer: Lexer::new(text),
        }
    }
}

impl<'a> Iterator for LexerIter<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.next() {
            Ok(tok) if tok.kind == TokenKind::Eof => {
                self.done = true;
                None
            }
            Ok(tok) => Some(Ok(tok)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
