//! Binary arithmetic operators over exact integers

mod errors;
mod ops;
mod parse;

pub use errors::{ArithmeticError, OperatorError};
pub use ops::Operator;
