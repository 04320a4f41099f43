use std::fmt;

use crate::expression::ast::{Branch, ExpressionTree};

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Branch::Leaf(value) => write!(f, "{}", value),
            Branch::Node(tree) => write!(f, "{}", tree),
        }
    }
}
