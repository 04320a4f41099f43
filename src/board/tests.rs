use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, BoardError, standard_deck};
use crate::operator::Operator;

#[test]
fn test_solve_finds_known_solution() {
    let board = Board::new(vec![4, 1, 8, 7], 24);
    let solutions = board.solve(&Operator::ALL);
    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert_eq!(solution.evaluate(), Ok(24));
    }
    let rendered: Vec<String> = solutions.iter().map(|s| s.to_string()).collect();
    assert!(
        rendered.iter().any(|s| s == "((8 - 4) * (1 + 7))"),
        "missing (8 - 4) * (1 + 7) in {:?}",
        rendered
    );
}

#[test]
fn test_solve_without_solutions_is_empty() {
    let board = Board::new(vec![1, 1, 1, 1], 24);
    assert!(board.solve(&Operator::ALL).is_empty());
}

#[test]
fn test_division_by_zero_does_not_abort() {
    let board = Board::new(vec![4, 0], 0);
    let rendered: Vec<String> = board
        .solve(&[Operator::Divide])
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(rendered, vec!["(0 / 4)"]);
}

#[test]
fn test_inexact_division_never_appears() {
    let board = Board::new(vec![7, 2], 3);
    assert!(board.solve(&[Operator::Divide]).is_empty());
    assert!(board.evaluate_all(&[Operator::Divide]).is_empty());
}

#[test]
fn test_evaluate_all_keeps_only_valid_candidates() {
    let board = Board::new(vec![6, 3], 0);
    let mut values: Vec<i64> = board
        .evaluate_all(&Operator::ALL)
        .iter()
        .map(|(_, v)| *v)
        .collect();
    values.sort_unstable();
    // 6 / 3 survives, 3 / 6 does not
    assert_eq!(values, vec![-3, 2, 3, 9, 18]);
}

#[test]
fn test_single_card_board() {
    let board = Board::new(vec![24], 24);
    let solutions = board.solve(&[]);
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].to_string(), "24");

    let board = Board::new(vec![5], 24);
    assert!(board.solve(&Operator::ALL).is_empty());
}

#[test]
fn test_empty_operator_set_has_no_solutions() {
    let board = Board::new(vec![1, 2, 3], 6);
    assert_eq!(board.solve(&[]), vec![]);
    assert!(board.evaluate_all(&[]).is_empty());
}

#[test]
fn test_overflowing_candidates_are_discarded() {
    let board = Board::new(vec![i64::MAX, 2], i64::MAX - 2);
    let mut values: Vec<i64> = board
        .evaluate_all(&[Operator::Add, Operator::Subtract, Operator::Multiply])
        .iter()
        .map(|(_, v)| *v)
        .collect();
    values.sort_unstable();
    // MAX + 2 and MAX * 2 overflow
    assert_eq!(values, vec![2 - i64::MAX, i64::MAX - 2]);
    assert_eq!(board.solve(&Operator::ALL).len(), 1);
}

#[test]
fn test_solve_default() {
    let board = Board::new(vec![2, 3, 4], 24);
    let solutions = board.solve_default();
    assert!(solutions.iter().any(|s| s.to_string() == "(4 * (2 * 3))"));
    assert_eq!(solutions, board.solve(&Operator::ALL));
}

#[test]
fn test_standard_deck() {
    let deck = standard_deck();
    assert_eq!(deck.len(), 52);
    assert_eq!(deck.iter().filter(|&&c| c == 13).count(), 4);
    assert_eq!(deck.iter().min(), Some(&1));
    assert_eq!(deck.iter().max(), Some(&13));
}

#[test]
fn test_random_board_is_reproducible() {
    let deck = standard_deck();
    let mut rng = StdRng::seed_from_u64(42);
    let first = Board::random(&deck, 4, 24, &mut rng);
    let mut rng = StdRng::seed_from_u64(42);
    let second = Board::random(&deck, 4, 24, &mut rng);
    assert_eq!(first, second);
    assert!(first.is_ok());
    if let Ok(board) = first {
        assert_eq!(board.cards().len(), 4);
        assert_eq!(board.target(), 24);
        assert!(board.cards().iter().all(|c| (1..=13).contains(c)));
    }
}

#[test]
fn test_random_board_samples_without_replacement() {
    let deck: Vec<i64> = (1..=5).collect();
    let mut rng = StdRng::seed_from_u64(7);
    let board = Board::random(&deck, 5, 10, &mut rng);
    assert!(board.is_ok());
    if let Ok(board) = board {
        let mut cards = board.cards().to_vec();
        cards.sort_unstable();
        assert_eq!(cards, deck);
    }
}

#[test]
fn test_random_board_rejects_bad_sizes() {
    let deck = standard_deck();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        Board::random(&deck, 0, 24, &mut rng),
        Err(BoardError::InvalidSize { size: 0, deck: 52 })
    );
    assert_eq!(
        Board::random(&deck, 53, 24, &mut rng),
        Err(BoardError::InvalidSize { size: 53, deck: 52 })
    );
}
