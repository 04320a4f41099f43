//! Twentyfour - A solver for the 24 game and its variants
//!
//! Given a set of integer cards and a target, this library enumerates every way of combining
//! all of the cards with binary arithmetic operators into a single expression tree, and keeps
//! the trees whose value equals the target. All arithmetic is exact: division must leave no
//! remainder, and trees that divide by zero or inexactly are discarded.

pub mod board;
pub mod enumerator;
pub mod expression;
pub mod operator;

// Re-export the main public API
pub use board::{Board, BoardError};
pub use enumerator::{Enumerator, enumerate};
pub use expression::{Branch, ExpressionTree};
pub use operator::{ArithmeticError, Operator, OperatorError};

/// Find every expression over `cards` that evaluates to `target` using all four operators
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// let solutions = solve(&[4, 1, 8, 7], 24);
/// assert!(solutions.iter().any(|s| s.to_string() == "((1 + 7) * (8 - 4))"));
/// assert!(solve(&[1, 1, 1, 1], 24).is_empty());
/// ```
pub fn solve(cards: &[i64], target: i64) -> Vec<Branch> {
    Board::new(cards.to_vec(), target).solve_default()
}

/// Find every expression over `cards` that evaluates to `target` using the operators
/// written in `operators`, e.g. `"+-*/"` or `"+ *"`
///
/// # Errors
///
/// This function will return an error if:
/// * `operators` contains an unknown symbol or no symbol at all
///
/// # Examples
///
/// ```
/// use twentyfour::solve_with;
///
/// match solve_with(&[3, 5, 2], 16, "+*") {
///     Ok(solutions) => println!("{} solutions", solutions.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_with(
    cards: &[i64],
    target: i64,
    operators: &str,
) -> Result<Vec<Branch>, BoardError> {
    let operators = Operator::parse_set(operators)?;
    Ok(Board::new(cards.to_vec(), target).solve(&operators))
}
