//! Post-parse validation.
//!
//! The grammar is permissive about endpoint blocks: any subset of
//! `name`/`input`/`returns` passes parsing. This pass walks the finished
//! graph and rejects endpoints that are structurally complete but
//! semantically unusable. Endpoints are checked in declaration order and
//! the first failure is returned, so diagnostics are stable across runs.

use crate::graph::{Endpoint, Graph};

use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error("endpoint path is required")]
    MissingPath,

    #[error("endpoint method is required for {path}")]
    MissingMethod { path: String },

    #[error("`name` is not defined for {method} {path}")]
    MissingName { method: String, path: String },

    #[error("`returns` is not defined for {method} {path}")]
    MissingReturns { method: String, path: String },
}

pub fn validate(graph: &Graph) -> Result<(), ValidateError> {
    for endpoint in graph.endpoints.values() {
        validate_endpoint(endpoint)?;
    }
    Ok(())
}

fn validate_endpoint(endpoint: &Endpoint) -> Result<(), ValidateError> {
    if endpoint.path.is_empty() {
        return Err(ValidateError::MissingPath);
    }

    if endpoint.method.is_empty() {
        return Err(ValidateError::MissingMethod {
            path: endpoint.path.clone(),
        });
    }

    if endpoint.name.is_empty() {
        return Err(ValidateError::MissingName {
            method: endpoint.method.clone(),
            path: endpoint.path.clone(),
        });
    }

    if endpoint.returns.is_empty() {
        return Err(ValidateError::MissingReturns {
            method: endpoint.method.clone(),
            path: endpoint.path.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(path: &str, method: &str, name: &str, returns: &str) -> Endpoint {
        Endpoint {
            path: path.to_string(),
            method: method.to_string(),
            name: name.to_string(),
            returns: returns.to_string(),
            ..Endpoint::default()
        }
    }

    fn graph_with(endpoints: Vec<Endpoint>) -> Graph {
        let mut graph = Graph::default();
        for e in endpoints {
            graph.endpoints.insert(e.path.clone(), e);
        }
        graph
    }

    #[test]
    fn complete_endpoint_passes() {
        let graph = graph_with(vec![endpoint("/c", "GET", "ListComments", "[]Comment")]);
        assert_eq!(validate(&graph), Ok(()));
    }

    #[test]
    fn empty_graph_passes() {
        assert_eq!(validate(&Graph::default()), Ok(()));
    }

    #[test]
    fn missing_path() {
        let graph = graph_with(vec![endpoint("", "GET", "X", "T")]);
        assert_eq!(validate(&graph), Err(ValidateError::MissingPath));
    }

    #[test]
    fn missing_method() {
        let graph = graph_with(vec![endpoint("/x", "", "X", "T")]);
        assert_eq!(
            validate(&graph),
            Err(ValidateError::MissingMethod { path: "/x".to_string() })
        );
    }

    #[test]
    fn missing_name() {
        let graph = graph_with(vec![endpoint("/x", "GET", "", "T")]);
        assert_eq!(
            validate(&graph),
            Err(ValidateError::MissingName {
                method: "GET".to_string(),
                path: "/x".to_string(),
            })
        );
    }

    #[test]
    fn missing_returns() {
        let graph = graph_with(vec![endpoint("/x", "GET", "GetX", "")]);
        assert_eq!(
            validate(&graph),
            Err(ValidateError::MissingReturns {
                method: "GET".to_string(),
                path: "/x".to_string(),
            })
        );
    }

    #[test]
    fn first_invalid_in_declaration_order_wins() {
        let graph = graph_with(vec![
            endpoint("/ok", "GET", "GetOk", "T"),
            endpoint("/b", "GET", "", "T"),
            endpoint("/a", "GET", "GetA", ""),
        ]);
        assert_eq!(
            validate(&graph),
            Err(ValidateError::MissingName {
                method: "GET".to_string(),
                path: "/b".to_string(),
            })
        );
    }

    #[test]
    fn error_messages_identify_the_endpoint() {
        let err = ValidateError::MissingReturns {
            method: "GET".to_string(),
            path: "/api/v1/comments".to_string(),
        };
        assert_eq!(err.to_string(), "`returns` is not defined for GET /api/v1/comments");
    }
}
