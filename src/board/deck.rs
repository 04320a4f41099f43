use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::constants::{RANKS, SUITS};
use crate::board::errors::BoardError;
use crate::board::state::Board;

/// Ranks 1 to 13, once per suit
pub fn standard_deck() -> Vec<i64> {
    let mut deck = Vec::with_capacity(RANKS.clone().count() * SUITS);
    for _ in 0..SUITS {
        deck.extend(RANKS);
    }
    deck
}

impl Board {
    /// Deals `size` cards from `deck` without replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or larger than the deck.
    pub fn random<R: Rng + ?Sized>(
        deck: &[i64],
        size: usize,
        target: i64,
        rng: &mut R,
    ) -> Result<Board, BoardError> {
        if size == 0 || size > deck.len() {
            warn!("Cannot deal {} cards from a deck of {}", size, deck.len());
            return Err(BoardError::InvalidSize {
                size,
                deck: deck.len(),
            });
        }

        let cards: Vec<i64> = deck.choose_multiple(rng, size).copied().collect();
        debug!("Dealt {:?} from a deck of {}", cards, deck.len());
        Ok(Board::new(cards, target))
    }

}
