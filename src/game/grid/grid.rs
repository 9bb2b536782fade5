//! Ingredient grid.
//!
//! Pure data: a square matrix of `Ingredient` plus the read/write primitives the
//! systems build on. Rows are indexed first (`cells[row][col]`).

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Serialize, Deserialize};

use crate::game::types::{Ingredient, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientGrid {
    cells: Vec<Vec<Ingredient>>,
}

/// Fill a `size`×`size` grid with random ingredients (never the marker).
pub fn generate_grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> IngredientGrid {
    let cells = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| *Ingredient::SEEDABLE.choose(rng).unwrap_or(&Ingredient::Water))
                .collect()
        })
        .collect();
    IngredientGrid { cells }
}

impl IngredientGrid {
    pub fn filled(size: usize, ingredient: Ingredient) -> Self {
        Self { cells: vec![vec![ingredient; size]; size] }
    }

    /// Build a grid from explicit rows. Returns `None` unless the rows form a square.
    pub fn from_rows(rows: Vec<Vec<Ingredient>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self { cells: rows })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Position) -> Option<Ingredient> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Overwrite a cell. Out-of-bounds writes are ignored and reported as `false`.
    pub fn set(&mut self, pos: Position, ingredient: Ingredient) -> bool {
        match self.cells.get_mut(pos.row).and_then(|row| row.get_mut(pos.col)) {
            Some(cell) => {
                *cell = ingredient;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Vec<Ingredient>] {
        &self.cells
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Position { row, col }))
    }

    /// The up to 8 in-bounds neighbours of `pos` (orthogonal and diagonal).
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let size = self.size();
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let row = pos.row.checked_add_signed(dr)?;
                let col = pos.col.checked_add_signed(dc)?;
                (row < size && col < size).then_some(Position { row, col })
            })
    }

    pub fn count(&self, ingredient: Ingredient) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == ingredient).count()
    }

    pub fn count_in_column(&self, col: usize, ingredient: Ingredient) -> usize {
        self.cells
            .iter()
            .filter(|row| row.get(col) == Some(&ingredient))
            .count()
    }

    pub fn contains_marker(&self) -> bool {
        self.cells.iter().flatten().any(|c| c.is_marker())
    }
}
