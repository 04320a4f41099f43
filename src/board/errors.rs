use thiserror::Error;

use crate::operator::OperatorError;

/// Errors that abort board construction or a solve before any search runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot deal {size} cards from a deck of {deck}")]
    InvalidSize { size: usize, deck: usize },
    #[error("Operator error: {0}")]
    OperatorError(#[from] OperatorError),
}
