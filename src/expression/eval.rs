use log::trace;

use crate::expression::ast::{Branch, ExpressionTree};
use crate::operator::ArithmeticError;

impl ExpressionTree {
    /// Evaluates both branches, then applies this node's operator.
    ///
    /// # Errors
    ///
    /// Fails with the first [`ArithmeticError`] raised anywhere in the tree.
    pub fn evaluate(&self) -> Result<i64, ArithmeticError> {
        let left = self.left.evaluate()?;
        let right = self.right.evaluate()?;
        let result = self.operator.apply(left, right);

        if let Err(e) = &result {
            trace!("{} {} {} failed: {}", left, self.operator, right, e);
        }

        result
    }
}

impl Branch {
    /// A leaf is its own value; a node is evaluated recursively.
    ///
    /// # Errors
    ///
    /// Fails when the nested tree fails to evaluate.
    pub fn evaluate(&self) -> Result<i64, ArithmeticError> {
        match self {
            Branch::Leaf(value) => Ok(*value),
            Branch::Node(tree) => tree.evaluate(),
        }
    }
}
