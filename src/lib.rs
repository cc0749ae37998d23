//! Front end for a small REST schema language.
//!
//! Source text containing `type` declarations and HTTP endpoint
//! declarations is lexed, parsed, and validated into a [`Graph`] that
//! downstream code generators consume. A parse either yields a complete
//! graph or a single positioned error; nothing in between.
//!
//! ```
//! let text = r#"
//! ## A comment on a post.
//! type Comment {
//!   id: int64
//!   body: string
//! }
//!
//! GET "/api/v1/comments" { name: ListComments  returns: []Comment }
//! "#;
//!
//! let graph = routegraph::parse(text).unwrap();
//! assert_eq!(graph.types.get("Comment").unwrap().doc_comment, "A comment on a post.");
//! assert_eq!(graph.endpoints.get("/api/v1/comments").unwrap().returns, "[]Comment");
//! ```

// turns source text into a stream of classified, positioned tokens.
mod lexer;
pub use lexer::{LexError, Lexer, LexerIter, Token, TokenKind};

// the in-memory schema representation: pure data, written only by the
// parser, plus doc-comment normalization and the builtin scalar table.
mod graph;
pub use graph::{is_builtin, normalize_comment, Endpoint, Field, Graph, OrderedMap, Type, BUILTINS};

// recursive-descent parsing over the token stream.
mod parser;
pub use parser::{parse, parse_with_config, ParseError, ParserConfig, Pos, HTTP_METHODS};

// post-parse validation of the finished graph.
mod checker;
pub use checker::{validate, ValidateError};

// identifier derivation from route paths and related naming conventions.
mod names;
pub use names::{api_name, capitalize, is_singular, resolver_method_name};

mod error;
pub use error::Error;
