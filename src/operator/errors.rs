use thiserror::Error;

/// Recoverable failures raised while applying an operator
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not produce an integer")]
    InexactDivision,
    #[error("Integer overflow")]
    Overflow,
}

/// Errors raised when an operator set cannot be built from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("Unknown operator symbol: {0}")]
    UnknownSymbol(String),
    #[error("Operator set cannot be empty")]
    Empty,
}
