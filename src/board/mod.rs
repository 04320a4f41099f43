//! A dealt set of cards with a target, and the search for solutions over it

pub mod constants;
mod deck;
mod errors;
mod state;

pub use deck::standard_deck;
pub use errors::BoardError;
pub use state::Board;

#[cfg(test)]
mod tests;
