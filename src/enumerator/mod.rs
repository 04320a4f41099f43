//! Exhaustive search over the ways a list of operands collapses into one tree

mod search;

pub use search::{Enumerator, enumerate};
