//! The in-memory representation of a parsed schema.
//!
//! A [`Graph`] is built exactly once per parse call and handed to the
//! caller by value; nothing mutates it afterwards. The parser is the only
//! writer. Collections preserve declaration order so that iteration, code
//! generation, and error reporting are reproducible across runs.

mod ordered;
pub use ordered::OrderedMap;

mod doc;
pub use doc::normalize_comment;

use crate::names;

/// Type names that need no relationship resolution downstream. Field types
/// outside this set are references to other declared types.
pub const BUILTINS: &[&str] = &["int", "int64", "string", "bool", "float", "float64"];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// The root output of a parse: every type and endpoint declared in one
/// schema source, keyed by type name and route path respectively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub types: OrderedMap<Type>,
    pub endpoints: OrderedMap<Endpoint>,
}

/// A named record shape. A type with zero fields is legal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Type {
    pub name: String,
    pub fields: OrderedMap<Field>,
    pub doc_comment: String,
}

/// A single HTTP route. The grammar accepts an endpoint block with any
/// subset of its keys; the checker rejects incomplete ones after the fact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    pub name: String,
    pub path: String,
    pub method: String,
    pub args: OrderedMap<Field>,
    pub returns: String,
    pub doc_comment: String,
}

impl Endpoint {
    /// Derives the API-friendly identifier for this endpoint from its route
    /// path, e.g. `/api/v1/comments/:commentID` -> `ApiV1CommentsByCommentID`.
    pub fn api_name(&self) -> String {
        names::api_name(&self.path)
    }
}

/// A name/type pair. The type is kept as the literal source text because it
/// may be a builtin scalar, a declared type, or a list of either; resolving
/// the reference is the consumer's job, not the front end's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub is_optional: bool,
    pub doc_comment: String,
}

impl Field {
    /// The referenced type name with any `[]` list marker removed.
    pub fn base_type(&self) -> &str {
        self.ty.strip_prefix("[]").unwrap_or(&self.ty)
    }

    pub fn is_list(&self) -> bool {
        self.ty.starts_with("[]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_recognized() {
        assert!(is_builtin("int64"));
        assert!(is_builtin("string"));
        assert!(!is_builtin("Comment"));
        assert!(!is_builtin("[]int64"));
    }

    #[test]
    fn field_base_type_strips_list_marker() {
        let field = Field {
            name: "comments".to_string(),
            ty: "[]Comment".to_string(),
            ..Field::default()
        };
        assert_eq!(field.base_type(), "Comment");
        assert!(field.is_list());

        let scalar = Field {
            name: "id".to_string(),
            ty: "int64".to_string(),
            ..Field::default()
        };
        assert_eq!(scalar.base_type(), "int64");
        assert!(!scalar.is_list());
    }

    #[test]
    fn endpoint_api_name_uses_path() {
        let endpoint = Endpoint {
            path: "/api/v1/comments/:commentID".to_string(),
            method: "GET".to_string(),
            ..Endpoint::default()
        };
        assert_eq!(endpoint.api_name(), "ApiV1CommentsByCommentID");
    }
}
