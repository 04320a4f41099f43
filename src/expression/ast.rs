use crate::operator::Operator;

/// One side of a tree node: either a card value or a nested tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Branch {
    Leaf(i64),
    Node(Box<ExpressionTree>),
}

/// An operator applied to two branches, left operand first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpressionTree {
    pub operator: Operator,
    pub left: Branch,
    pub right: Branch,
}

impl ExpressionTree {
    pub fn new(operator: Operator, left: Branch, right: Branch) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }

    /// Leaf values read left to right
    pub fn leaves(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<i64>) {
        self.left.collect_leaves(out);
        self.right.collect_leaves(out);
    }

    /// Number of operator nodes in the tree, this one included
    pub fn operator_count(&self) -> usize {
        1 + self.left.operator_count() + self.right.operator_count()
    }
}

impl Branch {
    /// Wraps `tree` as a branch
    pub fn node(tree: ExpressionTree) -> Self {
        Branch::Node(Box::new(tree))
    }

    pub fn leaves(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<i64>) {
        match self {
            Branch::Leaf(value) => out.push(*value),
            Branch::Node(tree) => tree.collect_leaves(out),
        }
    }

    pub fn operator_count(&self) -> usize {
        match self {
            Branch::Leaf(_) => 0,
            Branch::Node(tree) => tree.operator_count(),
        }
    }
}

impl From<i64> for Branch {
    fn from(value: i64) -> Self {
        Branch::Leaf(value)
    }
}

impl From<ExpressionTree> for Branch {
    fn from(tree: ExpressionTree) -> Self {
        Branch::node(tree)
    }
}
