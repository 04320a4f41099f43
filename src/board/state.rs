use log::{debug, info, trace};

use crate::enumerator::Enumerator;
use crate::expression::Branch;
use crate::operator::Operator;

/// The cards in play and the value they must reach.
///
/// Values are `i64`. A candidate whose intermediate or final value leaves that range is
/// discarded with [`ArithmeticError::Overflow`](crate::operator::ArithmeticError::Overflow),
/// so boards with very large cards can miss solutions that exist over unbounded integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<i64>,
    target: i64,
}

impl Board {
    pub fn new(cards: Vec<i64>, target: i64) -> Self {
        Self { cards, target }
    }

    pub fn cards(&self) -> &[i64] {
        &self.cards
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Every candidate that evaluates without an arithmetic error, paired with its value
    pub fn evaluate_all(&self, operators: &[Operator]) -> Vec<(Branch, i64)> {
        let enumerator = Enumerator::new(operators);
        debug!(
            "Evaluating {} cards with {} distinct operators",
            self.cards.len(),
            enumerator.operators().len()
        );

        let candidates = enumerator.enumerate(&self.cards);
        let total = candidates.len();

        let evaluated: Vec<(Branch, i64)> = candidates
            .into_iter()
            .filter_map(|candidate| match candidate.evaluate() {
                Ok(value) => Some((candidate, value)),
                Err(e) => {
                    trace!("Discarding {}: {}", candidate, e);
                    None
                }
            })
            .collect();

        debug!("{} of {} candidates evaluated successfully", evaluated.len(), total);
        evaluated
    }

    /// Every candidate whose value equals the target. An empty result is not an error.
    pub fn solve(&self, operators: &[Operator]) -> Vec<Branch> {
        info!("Solving cards {:?} for target {}", self.cards, self.target);

        let solutions: Vec<Branch> = self
            .evaluate_all(operators)
            .into_iter()
            .filter(|(_, value)| *value == self.target)
            .map(|(candidate, _)| candidate)
            .collect();

        info!("Found {} solutions", solutions.len());
        solutions
    }

    /// Solves with all four operators
    pub fn solve_default(&self) -> Vec<Branch> {
        self.solve(&Operator::ALL)
    }
}
