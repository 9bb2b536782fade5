//! Scoring configuration constants.

/// Score at which a player wins. The game ends the instant it is reached.
pub const WINNING_SCORE: u32 = 10;

/// Points awarded to the acting player for every turn whose move was accepted.
pub const TURN_POINT: u32 = 1;

/// Minimum number of matching cells in a column for a column award.
pub const EXPLOSION_THRESHOLD: usize = 3;
