//! Expression trees built from cards and operators

mod ast;
mod display;
mod eval;

pub use ast::{Branch, ExpressionTree};
