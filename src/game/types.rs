use std::fmt;

use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell on the main diagonal addressed by a track position.
    pub fn diagonal(track_pos: usize) -> Self {
        Self { row: track_pos, col: track_pos }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement along the shared track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Content of a grid cell.
///
/// `Water` is the neutral state and `StarAnise` the transient marker a cell
/// holds between a placement and the cascade that settles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ingredient {
    Apple,
    Lemon,
    Cherry,
    Water,
    Sugar,
    StarAnise,
    Toadstool,
}

impl Ingredient {
    pub const ALL: [Ingredient; 7] = [
        Ingredient::Apple,
        Ingredient::Lemon,
        Ingredient::Cherry,
        Ingredient::Water,
        Ingredient::Sugar,
        Ingredient::StarAnise,
        Ingredient::Toadstool,
    ];

    /// Everything a freshly seeded cell may hold.
    pub const SEEDABLE: [Ingredient; 6] = [
        Ingredient::Apple,
        Ingredient::Lemon,
        Ingredient::Cherry,
        Ingredient::Water,
        Ingredient::Sugar,
        Ingredient::Toadstool,
    ];

    pub fn is_marker(self) -> bool {
        self == Ingredient::StarAnise
    }

    /// Two-letter tag used by the console board.
    pub fn symbol(self) -> &'static str {
        match self {
            Ingredient::Apple => "Ap",
            Ingredient::Lemon => "Le",
            Ingredient::Cherry => "Ch",
            Ingredient::Water => "~~",
            Ingredient::Sugar => "Su",
            Ingredient::StarAnise => "**",
            Ingredient::Toadstool => "To",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ingredient::Apple => "Apple",
            Ingredient::Lemon => "Lemon",
            Ingredient::Cherry => "Cherry",
            Ingredient::Water => "Water",
            Ingredient::Sugar => "Sugar",
            Ingredient::StarAnise => "Star Anise",
            Ingredient::Toadstool => "Toadstool",
        };
        f.write_str(name)
    }
}

/// One of the two entries of the shared track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    pub fn toggled(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u8,
    pub score: u32,
    pub hand: Vec<Ingredient>,
    pub slot: Slot,
}

impl Player {
    pub fn new(id: u8, slot: Slot, hand: Vec<Ingredient>) -> Self {
        Self {
            id,
            score: 0,
            hand,
            slot,
        }
    }
}

/// Where the current actor stands within their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for a track move.
    Move,
    /// Move accepted, waiting for an ingredient (or for the turn to end).
    Ingredient,
    /// Ingredient placed, marker waiting for the cascade.
    Placed,
    /// Cascade settled.
    Resolved,
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnPhase::Move => "move",
            TurnPhase::Ingredient => "ingredient",
            TurnPhase::Placed => "placed",
            TurnPhase::Resolved => "resolved",
        };
        f.write_str(name)
    }
}
