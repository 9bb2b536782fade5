//! Cascade (explosion) system.
//!
//! Every transient marker on the grid is cleared to `Water`, then the cascade
//! spreads to each of the 8 neighbours whose content equals the cleared value,
//! and from there onwards, depth-first. Matching is done against the cleared
//! value, not the ingredient that was placed, so a cascade travels through the
//! `Water` region touching the marker.
//!
//! Resolution uses an explicit stack and a visited mask shared by the whole
//! call: a cell is processed at most once, so a call does at most N² steps.

use log::{debug, error};
use serde::Serialize;

use crate::game::grid::IngredientGrid;
use crate::game::types::{Ingredient, Position};

/// Outcome of one resolution pass over the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cascade {
    /// Marker cells cleared, in row-major scan order.
    pub markers: Vec<Position>,
    /// Every cell the cascade processed (markers included), in processing order.
    pub reached: Vec<Position>,
    /// Markers still on the grid after the pass. Always 0 unless resolution is broken.
    pub leftover: usize,
}

impl Cascade {
    pub fn occurred(&self) -> bool {
        !self.markers.is_empty() || self.leftover > 0
    }

    /// Number of cells the cascade spread to beyond the markers themselves.
    pub fn spread(&self) -> usize {
        self.reached.len() - self.markers.len()
    }
}

/// Resolve every pending marker on the grid.
pub fn resolve_cascade(grid: &mut IngredientGrid) -> Cascade {
    let size = grid.size();
    let mut visited = vec![vec![false; size]; size];
    let mut cascade = Cascade::default();

    let scan: Vec<Position> = grid.positions().collect();
    for pos in scan {
        if grid.get(pos) == Some(Ingredient::StarAnise) {
            explode_from(grid, pos, &mut visited, &mut cascade);
        }
    }

    cascade.leftover = grid.count(Ingredient::StarAnise);
    if cascade.leftover > 0 {
        error!("[Cascade] {} marker(s) left on the grid after resolution", cascade.leftover);
    }
    if cascade.occurred() {
        debug!(
            "[Cascade] markers={:?} spread={} reached={}",
            cascade.markers,
            cascade.spread(),
            cascade.reached.len()
        );
    }
    cascade
}

fn explode_from(
    grid: &mut IngredientGrid,
    start: Position,
    visited: &mut [Vec<bool>],
    cascade: &mut Cascade,
) {
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if visited[pos.row][pos.col] {
            continue;
        }
        visited[pos.row][pos.col] = true;

        if grid.get(pos) == Some(Ingredient::StarAnise) {
            cascade.markers.push(pos);
        }
        grid.set(pos, Ingredient::Water);
        cascade.reached.push(pos);

        let cleared = Ingredient::Water;
        stack.extend(
            grid.neighbors(pos)
                .filter(|n| !visited[n.row][n.col] && grid.get(*n) == Some(cleared)),
        );
    }
}
