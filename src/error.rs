use crate::checker::ValidateError;
use crate::parser::ParseError;

use thiserror::Error as ThisError;

/// The single failure type surfaced by a parse call. Exactly one error is
/// reported per failed call; there is no recovery and no partial graph.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}
