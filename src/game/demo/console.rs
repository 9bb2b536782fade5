//! Console input for local play.
//!
//! Reads numbered choices line by line and validates their range before handing
//! them to the turn loop. End of input ends the game.

use std::io::{BufRead, Write};

use crate::game::demo::render::{render_board, render_hand};
use crate::game::error::CoreError;
use crate::game::game_loop::TurnInput;
use crate::game::state::{CascadeReport, GameState, TurnSummary};
use crate::game::types::Direction;

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    /// Print the JSON game state after every turn.
    snapshots: bool,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W, snapshots: bool) -> Self {
        Self { reader, writer, snapshots }
    }

    /// Prompt until `parse` accepts a line. `None` on end of input or read error.
    fn prompt<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        loop {
            let _ = write!(self.writer, "{}", question);
            let _ = self.writer.flush();

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            if let Some(value) = parse(line.trim()) {
                return Some(value);
            }
            let _ = writeln!(self.writer, "Invalid choice! Please try again.");
        }
    }
}

fn parse_direction(input: &str) -> Option<Direction> {
    match input {
        "1" => Some(Direction::Left),
        "2" => Some(Direction::Right),
        _ => None,
    }
}

/// `0` skips placing; `1..=hand_len` picks an ingredient.
fn parse_ingredient_choice(input: &str, hand_len: usize) -> Option<Option<usize>> {
    match input.parse::<usize>().ok()? {
        0 => Some(None),
        n if n <= hand_len => Some(Some(n - 1)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> TurnInput for ConsoleInput<R, W> {
    fn choose_direction(&mut self, state: &GameState, player: usize) -> Option<Direction> {
        let _ = writeln!(self.writer, "\n{}", render_board(state));
        let _ = writeln!(self.writer, "Player {}, it is your turn!", state.players[player].id);
        self.prompt("Enter a move (1-left, 2-right): ", parse_direction)
    }

    fn choose_ingredient(&mut self, state: &GameState, player: usize) -> Option<usize> {
        let hand_len = state.players[player].hand.len();
        let _ = writeln!(self.writer, "Choose the ingredient to use (0 to skip):");
        let _ = writeln!(self.writer, "{}", render_hand(&state.players[player]));
        self.prompt("Enter the ingredient choice: ", |s| parse_ingredient_choice(s, hand_len))
            .flatten()
    }

    fn on_rejected(&mut self, _state: &GameState, error: &CoreError) {
        let _ = writeln!(self.writer, "Rejected: {}", error);
    }

    fn on_cascade(&mut self, state: &GameState, report: &CascadeReport) {
        let _ = writeln!(
            self.writer,
            "Explosion! {} cell(s) settled.",
            report.cascade.reached.len()
        );
        if let Some(next) = report.extra_turn.and_then(|i| state.players.get(i)) {
            let _ = writeln!(self.writer, "Player {} plays again ({:?} slot).", next.id, next.slot);
        }
    }

    fn on_turn_end(&mut self, state: &GameState, summary: &TurnSummary) {
        if let Some(winner) = summary.winner {
            let _ = writeln!(self.writer, "Player {} wins!", state.players[winner].id);
        }
        if self.snapshots {
            match serde_json::to_string(state) {
                Ok(json) => {
                    let _ = writeln!(self.writer, "{}", json);
                }
                Err(e) => log::warn!("[Console] failed to serialize game state: {}", e),
            }
        }
    }
}
