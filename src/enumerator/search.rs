use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{Branch, ExpressionTree};
use crate::operator::Operator;

/// Builds every expression tree that uses each operand exactly once.
///
/// Two elements of the operand list are repeatedly merged under an operator until a single
/// element remains. For a commutative operator only the pair whose first position is lower
/// is merged, so `a + b` is produced but `b + a` is not.
#[derive(Debug, Clone)]
pub struct Enumerator {
    operators: Vec<Operator>,
}

impl Enumerator {
    /// Repeated operators are dropped; the first occurrence keeps its place.
    pub fn new(operators: &[Operator]) -> Self {
        let mut unique = Vec::with_capacity(operators.len());
        for &operator in operators {
            if !unique.contains(&operator) {
                unique.push(operator);
            }
        }
        Self { operators: unique }
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Enumerates every candidate over the given card values.
    ///
    /// Lists of zero or one operand come back unchanged, as bare leaves.
    pub fn enumerate(&self, operands: &[i64]) -> Vec<Branch> {
        let branches: Vec<Branch> = operands.iter().copied().map(Branch::Leaf).collect();
        self.enumerate_branches(branches)
    }

    /// Same as [`Enumerator::enumerate`] but over operands that may already be subtrees.
    ///
    /// The first level of merges is spread across the rayon pool; each of those branches
    /// is searched sequentially. The output order does not depend on scheduling.
    pub fn enumerate_branches(&self, operands: Vec<Branch>) -> Vec<Branch> {
        info!(
            "Enumerating trees over {} operands with operators [{}]",
            operands.len(),
            self.symbols()
        );

        if operands.len() <= 1 {
            debug!("Degenerate operand list, returning it unchanged");
            return operands;
        }

        let merges = self.merges(operands.len());
        let candidates: Vec<Branch> = merges
            .into_par_iter()
            .flat_map_iter(|(i, j, operator)| {
                let mut out = Vec::new();
                self.expand(&merge(&operands, i, j, operator), &mut out);
                out
            })
            .collect();

        info!("Enumerated {} candidate trees", candidates.len());
        candidates
    }

    fn expand(&self, operands: &[Branch], out: &mut Vec<Branch>) {
        if operands.len() <= 1 {
            out.extend(operands.iter().cloned());
            return;
        }

        for (i, j, operator) in self.merges(operands.len()) {
            self.expand(&merge(operands, i, j, operator), out);
        }
    }

    /// Every `(i, j, operator)` choice for a list of `len` operands, after pruning
    fn merges(&self, len: usize) -> Vec<(usize, usize, Operator)> {
        let mut merges = Vec::with_capacity(len * len * self.operators.len());
        for i in 0..len {
            for j in 0..len {
                if i == j {
                    continue;
                }
                for &operator in &self.operators {
                    if operator.is_commutative() && i > j {
                        continue;
                    }
                    merges.push((i, j, operator));
                }
            }
        }
        merges
    }

    fn symbols(&self) -> String {
        self.operators.iter().map(|o| o.symbol()).collect()
    }
}

/// Removes positions `i` and `j` and appends `operator(operands[i], operands[j])`
fn merge(operands: &[Branch], i: usize, j: usize, operator: Operator) -> Vec<Branch> {
    let mut next: Vec<Branch> = operands
        .iter()
        .enumerate()
        .filter(|(k, _)| *k != i && *k != j)
        .map(|(_, branch)| branch.clone())
        .collect();

    if let (Some(left), Some(right)) = (operands.get(i), operands.get(j)) {
        next.push(Branch::node(ExpressionTree::new(
            operator,
            left.clone(),
            right.clone(),
        )));
    }
    next
}

/// Enumerates every candidate tree over `operands` using `operators`
pub fn enumerate(operands: &[i64], operators: &[Operator]) -> Vec<Branch> {
    Enumerator::new(operators).enumerate(operands)
}
