// Defaults for a standard game
pub const DEFAULT_TARGET: i64 = 24;
pub const DEFAULT_SIZE: usize = 4;
pub const RANKS: std::ops::RangeInclusive<i64> = 1..=13;
pub const SUITS: usize = 4;
