//! Recursive-descent parser for the schema language.
//!
//! The parser pulls tokens from the lexer and incrementally populates a
//! [`Graph`]. Every production returns a `Result`; the first grammar
//! violation aborts the whole parse. No recovery is attempted and no
//! partial graph is ever returned.
//!
//! The grammar is deliberately strict about whitespace: most positions
//! require a separating whitespace token, and since the lexer greedily
//! groups whitespace runs into a single token, "at least one" is exactly
//! one `expect`. Existing schema files depend on this strictness.

use crate::checker;
use crate::error::Error;
use crate::graph::{normalize_comment, Endpoint, Field, Graph, OrderedMap, Type};
use crate::lexer::{Lexer, Token, TokenKind};

use super::config::ParserConfig;
use super::error::{ParseError, Pos};

type Res<T> = std::result::Result<T, ParseError>;

/// HTTP verbs that open an endpoint declaration.
pub const HTTP_METHODS: &[&str] = &[
    "GET", "PUT", "POST", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE", "CONNECT",
];

fn is_http_method(word: &str) -> bool {
    HTTP_METHODS.contains(&word)
}

// A doc comment only attaches across simple line breaks; a blank line
// between the comment and the thing it would document detaches it.
fn has_blank_line(ws: &str) -> bool {
    ws.bytes().filter(|&b| b == b'\n').count() >= 2
}

/// Parses a complete schema source into a validated [`Graph`].
pub fn parse(text: &str) -> Result<Graph, Error> {
    parse_with_config(text, ParserConfig::default())
}

pub fn parse_with_config(text: &str, config: ParserConfig) -> Result<Graph, Error> {
    if let Some(limit) = config.max_text_size {
        if text.len() > limit {
            return Err(ParseError::TextSizeLimitExceeded {
                limit,
                text_size: text.len(),
            }
            .into());
        }
    }

    let mut parser = SchemaParser::new(text);
    parser.run()?;
    let graph = parser.graph;
    checker::validate(&graph)?;
    Ok(graph)
}

struct SchemaParser<'a> {
    text: &'a str,
    lexer: Lexer<'a>,
    graph: Graph,
}

impl<'a> SchemaParser<'a> {
    fn new(text: &'a str) -> SchemaParser<'a> {
        SchemaParser {
            text,
            lexer: Lexer::new(text),
            graph: Graph::default(),
        }
    }

    fn next_token(&mut self) -> Res<Token<'a>> {
        self.lexer.next().map_err(|e| ParseError::lex(self.text, e))
    }

    fn peek_token(&mut self) -> Res<Token<'a>> {
        self.lexer.peek().map_err(|e| ParseError::lex(self.text, e))
    }

    fn syntax(&self, tok: Token<'a>, message: &'static str) -> ParseError {
        ParseError::syntax(self.text, tok, message)
    }

    fn expect(&mut self, kind: TokenKind, message: &'static str) -> Res<Token<'a>> {
        let tok = self.next_token()?;
        if tok.kind != kind {
            return Err(self.syntax(tok, message));
        }
        Ok(tok)
    }

    fn run(&mut self) -> Res<()> {
        let mut pending_doc: Option<String> = None;
        loop {
            let tok = self.next_token()?;
            match tok.kind {
                // an orphaned trailing comment is discarded, not an error
                TokenKind::Eof => return Ok(()),
                TokenKind::Whitespace => {
                    if has_blank_line(tok.text) {
                        pending_doc = None;
                    }
                }
                TokenKind::Comment => pending_doc = Some(normalize_comment(tok.text)),
                TokenKind::Identifier if tok.text == "type" => {
                    self.parse_type_decl(pending_doc.take())?;
                }
                TokenKind::Identifier if is_http_method(tok.text) => {
                    self.parse_endpoint(tok, pending_doc.take())?;
                }
                _ => {
                    return Err(self.syntax(tok, "expected a `type` or endpoint declaration"));
                }
            }
        }
    }

    // type IDENT { fields }
    fn parse_type_decl(&mut self, doc: Option<String>) -> Res<()> {
        self.expect(TokenKind::Whitespace, "expected whitespace after `type`")?;
        let name = self.expect(TokenKind::Identifier, "expected a type name")?;
        let fields = self.parse_field_block(false)?;

        let ty = Type {
            name: name.text.to_string(),
            fields,
            doc_comment: doc.unwrap_or_default(),
        };
        // duplicate type declarations overwrite: last write wins
        self.graph.types.insert(name.text.to_string(), ty);
        Ok(())
    }

    // METHOD "path" { name: IDENT  input: { fields }  returns: TYPEREF }
    // The method identifier has already been consumed by the caller.
    fn parse_endpoint(&mut self, method: Token<'a>, doc: Option<String>) -> Res<()> {
        self.expect(
            TokenKind::Whitespace,
            "expected whitespace after the HTTP method",
        )?;
        let path_tok = self.expect(TokenKind::String, "expected a quoted route path")?;
        let path = &path_tok.text[1..path_tok.text.len() - 1];

        if self.graph.endpoints.contains_key(path) {
            return Err(ParseError::DuplicateEndpoint {
                path: path.to_string(),
                pos: Pos::locate(self.text, path_tok.start),
            });
        }

        let mut endpoint = Endpoint {
            path: path.to_string(),
            method: method.text.to_string(),
            doc_comment: doc.unwrap_or_default(),
            ..Endpoint::default()
        };

        self.expect(
            TokenKind::Whitespace,
            "expected whitespace after the route path",
        )?;
        self.expect(TokenKind::OpenCurly, "expected `{` to open the endpoint block")?;

        let mut pending_doc: Option<String> = None;
        loop {
            let ws = self.expect(
                TokenKind::Whitespace,
                "expected whitespace inside the endpoint block",
            )?;
            if has_blank_line(ws.text) {
                pending_doc = None;
            }

            let tok = self.next_token()?;
            match tok.kind {
                TokenKind::CloseCurly => break,
                TokenKind::Comment => {
                    pending_doc = Some(normalize_comment(tok.text));
                }
                TokenKind::Identifier => {
                    if let Some(d) = pending_doc.take() {
                        endpoint.doc_comment = d;
                    }
                    match tok.text {
                        "name" => {
                            self.expect(TokenKind::Colon, "expected `:` after `name`")?;
                            self.expect(
                                TokenKind::Whitespace,
                                "expected whitespace after `name:`",
                            )?;
                            let name =
                                self.expect(TokenKind::Identifier, "expected an endpoint name")?;
                            endpoint.name = name.text.to_string();
                        }
                        "input" => {
                            self.expect(TokenKind::Colon, "expected `:` after `input`")?;
                            endpoint.args = self.parse_field_block(true)?;
                        }
                        "returns" => {
                            self.expect(TokenKind::Colon, "expected `:` after `returns`")?;
                            self.expect(
                                TokenKind::Whitespace,
                                "expected whitespace after `returns:`",
                            )?;
                            endpoint.returns = self.parse_type_ref()?;
                        }
                        _ => {
                            return Err(
                                self.syntax(tok, "expected `name`, `input`, or `returns`")
                            );
                        }
                    }
                }
                _ => {
                    return Err(self.syntax(tok, "expected `name`, `input`, or `returns`"));
                }
            }
        }

        self.graph.endpoints.insert(path.to_string(), endpoint);
        Ok(())
    }

    // { IDENT [?] : TYPEREF ... } with a leading whitespace separator.
    // `?` is legal only when the surrounding block allows optional fields.
    fn parse_field_block(&mut self, allow_optional: bool) -> Res<OrderedMap<Field>> {
        self.expect(TokenKind::Whitespace, "expected whitespace before `{`")?;
        self.expect(TokenKind::OpenCurly, "expected `{` to open the field block")?;
        self.expect(TokenKind::Whitespace, "expected whitespace after `{`")?;

        let mut fields = OrderedMap::new();
        let mut pending_doc: Option<String> = None;
        loop {
            let tok = self.next_token()?;
            match tok.kind {
                TokenKind::CloseCurly => return Ok(fields),
                TokenKind::Comment => {
                    pending_doc = Some(normalize_comment(tok.text));
                    let ws =
                        self.expect(TokenKind::Whitespace, "expected whitespace after a comment")?;
                    if has_blank_line(ws.text) {
                        pending_doc = None;
                    }
                }
                TokenKind::Identifier => {
                    let name = tok;
                    let mut is_optional = false;

                    let next = self.next_token()?;
                    match next.kind {
                        TokenKind::Question => {
                            if !allow_optional {
                                return Err(self.syntax(
                                    next,
                                    "optional fields are not allowed in this block",
                                ));
                            }
                            is_optional = true;
                            self.expect(TokenKind::Colon, "expected `:` after `?`")?;
                        }
                        TokenKind::Colon => {}
                        _ => return Err(self.syntax(next, "expected `:` after the field name")),
                    }

                    self.expect(TokenKind::Whitespace, "expected whitespace after `:`")?;
                    let ty = self.parse_type_ref()?;

                    let field = Field {
                        name: name.text.to_string(),
                        ty,
                        is_optional,
                        doc_comment: pending_doc.take().unwrap_or_default(),
                    };
                    fields.insert(name.text.to_string(), field);

                    // each field must be followed by whitespace, even
                    // before the closing curly
                    let ws = self.expect(
                        TokenKind::Whitespace,
                        "expected whitespace after the field type",
                    )?;
                    if has_blank_line(ws.text) {
                        pending_doc = None;
                    }
                }
                _ => return Err(self.syntax(tok, "expected a field name or `}`")),
            }
        }
    }

    // IDENT or []IDENT, preserved verbatim as the type reference text
    fn parse_type_ref(&mut self) -> Res<String> {
        let tok = self.peek_token()?;
        match tok.kind {
            TokenKind::OpenBracket => {
                _ = self.next_token()?;
                self.expect(TokenKind::CloseBracket, "expected `]` in a list type")?;
                let ident =
                    self.expect(TokenKind::Identifier, "expected a type name after `[]`")?;
                Ok(format!("[]{}", ident.text))
            }
            TokenKind::Identifier => {
                _ = self.next_token()?;
                Ok(tok.text.to_string())
            }
            _ => Err(self.syntax(tok, "expected a type reference")),
        }
    }
}
