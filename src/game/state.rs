use std::collections::VecDeque;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::config::game::{BOARD_SIZE, PLAYER_COUNT};
use crate::config::scoring::TURN_POINT;
use crate::game::entities::{spawn_players, TrackPositions};
use crate::game::error::CoreError;
use crate::game::grid::{generate_grid, IngredientGrid};
use crate::game::systems::{
    apply_award, coincidence_index, column_award, move_along_track, place_ingredient, redirect,
    resolve_cascade, Cascade, ColumnAward,
};
use crate::game::types::{Direction, Ingredient, Player, Position, Slot, TurnPhase};

/// Result of settling the grid after a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub occurred: bool,
    /// Slot granted an extra turn, if a cascade occurred.
    pub redirected_slot: Option<Slot>,
    /// Player who takes that extra turn.
    pub extra_turn: Option<usize>,
    pub cascade: Cascade,
}

/// What `end_turn` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    pub player: usize,
    pub points: u32,
    pub winner: Option<usize>,
    /// Player who acts next, `None` once the game is over.
    pub next: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: Uuid,
    pub grid: IngredientGrid,
    pub track: TrackPositions,
    pub players: [Player; PLAYER_COUNT],
    pub turn: u32,
    /// Players due to act, front first. Extra turns are queued right behind the
    /// current actor; the normal alternation is appended when the queue runs dry.
    pending_turns: VecDeque<usize>,
    phase: TurnPhase,
}

impl GameState {
    /// Build a game from explicit parts. Player 1 acts first.
    pub fn new(grid: IngredientGrid, track: TrackPositions, players: [Player; PLAYER_COUNT]) -> Self {
        GameState {
            game_id: Uuid::new_v4(),
            grid,
            track,
            players,
            turn: 1,
            pending_turns: (0..PLAYER_COUNT).collect(),
            phase: TurnPhase::Move,
        }
    }

    /// Start a game on a randomly filled grid; equal seeds give equal boards.
    pub fn initialize(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = generate_grid(BOARD_SIZE, &mut rng);
        let state = GameState::new(grid, TrackPositions::new(BOARD_SIZE), spawn_players());
        info!("[Game] game_id={} started with seed={}", state.game_id, seed);
        state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Index of the player whose turn it is, `None` once someone has won.
    pub fn current_player(&self) -> Option<usize> {
        if self.is_over() {
            return None;
        }
        self.pending_turns.front().copied()
    }

    pub fn pending_turns(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending_turns.iter().copied()
    }

    /// Track position of a player, read through the slot they hold.
    pub fn track_position(&self, player_index: usize) -> Option<usize> {
        self.players.get(player_index).map(|p| self.track.position(p.slot))
    }

    /// Move the acting player one step along the track.
    pub fn apply_move(&mut self, direction: Direction) -> Result<usize, CoreError> {
        let actor = self.actor_in_phase(TurnPhase::Move)?;
        let slot = self.players[actor].slot;
        let new_pos = move_along_track(&mut self.track, slot, direction)?;
        self.phase = TurnPhase::Ingredient;
        debug!(
            "[Game] game_id={} turn={} player={} moved {:?} to {}",
            self.game_id, self.turn, self.players[actor].id, direction, new_pos
        );
        Ok(new_pos)
    }

    /// Place an ingredient from the acting player's hand on their addressed cell.
    /// A rejection leaves the state as it was; the player may retry or end the turn.
    pub fn apply_ingredient(&mut self, ingredient: Ingredient) -> Result<Position, CoreError> {
        let actor = self.actor_in_phase(TurnPhase::Ingredient)?;
        let cell = place_ingredient(&mut self.grid, &self.track, &mut self.players[actor], ingredient)?;
        self.phase = TurnPhase::Placed;
        Ok(cell)
    }

    /// Settle every marker on the grid after an accepted placement. When a
    /// cascade occurred the arbiter toggles the causer's slot and the player it
    /// picks gets an extra turn right after the current one.
    pub fn resolve_cascades(&mut self) -> Result<CascadeReport, CoreError> {
        self.actor_in_phase(TurnPhase::Placed)?;
        let cascade = resolve_cascade(&mut self.grid);
        self.phase = TurnPhase::Resolved;

        let occurred = cascade.occurred();
        let redirected_slot = occurred.then(|| redirect(&mut self.players, &self.track));
        let extra_turn = redirected_slot.map(|_| coincidence_index(&self.players, &self.track));
        if let Some(next) = extra_turn {
            self.queue_extra_turn(next);
            info!(
                "[Game] game_id={} turn={} extra turn queued for player {}",
                self.game_id, self.turn, self.players[next].id
            );
        }

        Ok(CascadeReport { occurred, redirected_slot, extra_turn, cascade })
    }

    /// Finish the acting player's turn. Requires an accepted move; any marker
    /// still pending is resolved first.
    pub fn end_turn(&mut self) -> Result<TurnSummary, CoreError> {
        let actor = self.current_player().ok_or(CoreError::GameOver)?;
        match self.phase {
            TurnPhase::Move => {
                return Err(CoreError::OutOfPhase { expected: TurnPhase::Ingredient, actual: self.phase });
            }
            TurnPhase::Placed => {
                self.resolve_cascades()?;
            }
            TurnPhase::Ingredient | TurnPhase::Resolved => {}
        }

        self.players[actor].add_score(TURN_POINT);
        self.pending_turns.pop_front();
        if self.pending_turns.is_empty() {
            self.pending_turns.extend(0..PLAYER_COUNT);
        }
        self.turn += 1;
        self.phase = TurnPhase::Move;

        let winner = self.winner();
        if let Some(w) = winner {
            info!("[Game] game_id={} player {} wins with {} points", self.game_id, self.players[w].id, self.players[w].score);
        }
        if log::log_enabled!(log::Level::Debug) {
            if let Ok(snapshot) = serde_json::to_string(self) {
                debug!("[Game] snapshot {}", snapshot);
            }
        }

        Ok(TurnSummary {
            player: actor,
            points: TURN_POINT,
            winner,
            next: self.current_player(),
        })
    }

    /// Credit the column award for the ingredient at (`row`, `column`) to every player.
    /// Arguments go column first, as in `column_award`. Not part of the turn flow.
    pub fn apply_column_award(&mut self, column: usize, row: usize) -> Option<ColumnAward> {
        let award = column_award(&self.grid, column, row)?;
        apply_award(&mut self.players, &award);
        Some(award)
    }

    pub fn is_winner(&self, player_index: usize) -> bool {
        self.players.get(player_index).is_some_and(|p| p.is_winner())
    }

    pub fn winner(&self) -> Option<usize> {
        (0..PLAYER_COUNT).find(|&i| self.is_winner(i))
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    fn actor_in_phase(&self, expected: TurnPhase) -> Result<usize, CoreError> {
        let actor = self.current_player().ok_or(CoreError::GameOver)?;
        if self.phase != expected {
            return Err(CoreError::OutOfPhase { expected, actual: self.phase });
        }
        Ok(actor)
    }

    fn queue_extra_turn(&mut self, player_index: usize) {
        if self.pending_turns.is_empty() {
            self.pending_turns.push_back(player_index);
        } else {
            self.pending_turns.insert(1, player_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple_diagonal_game() -> GameState {
        let mut grid = IngredientGrid::filled(BOARD_SIZE, Ingredient::Sugar);
        grid.set(Position::new(1, 1), Ingredient::Apple);
        GameState::new(grid, TrackPositions::new(BOARD_SIZE), spawn_players())
    }

    #[test]
    fn test_initialize_is_reproducible() {
        let a = GameState::initialize(99);
        let b = GameState::initialize(99);
        assert_eq!(a.grid, b.grid);
        assert_ne!(a.game_id, b.game_id);
        assert!(!a.grid.contains_marker());
        assert_eq!(a.current_player(), Some(0));
    }

    #[test]
    fn test_phase_order_is_enforced() {
        let mut game = apple_diagonal_game();
        assert_eq!(
            game.apply_ingredient(Ingredient::Apple),
            Err(CoreError::OutOfPhase { expected: TurnPhase::Ingredient, actual: TurnPhase::Move })
        );
        assert!(matches!(game.end_turn(), Err(CoreError::OutOfPhase { .. })));
        game.apply_move(Direction::Right).expect("move");
        assert!(matches!(game.apply_move(Direction::Right), Err(CoreError::OutOfPhase { .. })));
    }

    #[test]
    fn test_rejected_move_keeps_phase() {
        let mut game = apple_diagonal_game();
        assert!(game.apply_move(Direction::Left).is_err());
        assert_eq!(game.phase(), TurnPhase::Move);
        assert_eq!(game.track_position(0), Some(0));
    }

    #[test]
    fn test_cascade_grants_extra_turn() {
        let mut game = apple_diagonal_game();
        assert_eq!(game.apply_move(Direction::Right), Ok(1));
        assert_eq!(game.apply_ingredient(Ingredient::Apple), Ok(Position::new(1, 1)));

        let report = game.resolve_cascades().expect("placed");
        assert!(report.occurred);
        // Both players start on the first slot, so player 2 is toggled away.
        // The slots then sit at 1 and 4 and player 1 replays.
        assert_eq!(game.players[0].slot, Slot::First);
        assert_eq!(game.players[1].slot, Slot::Second);
        assert_eq!(report.redirected_slot, Some(Slot::First));
        assert_eq!(report.extra_turn, Some(0));

        let summary = game.end_turn().expect("turn ends");
        assert_eq!(summary.player, 0);
        assert_eq!(summary.next, Some(0));
        assert_eq!(game.pending_turns().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(game.players[0].score, TURN_POINT);
    }

    #[test]
    fn test_failed_placement_still_ends_turn() {
        let mut game = apple_diagonal_game();
        game.apply_move(Direction::Right).expect("move");
        assert!(game.apply_ingredient(Ingredient::Lemon).is_err());
        let summary = game.end_turn().expect("turn ends");
        assert_eq!(summary.next, Some(1));
        assert_eq!(game.players[0].hand.len(), 3);
        assert_eq!(game.players[0].score, TURN_POINT);
    }

    #[test]
    fn test_end_turn_resolves_pending_marker() {
        let mut game = apple_diagonal_game();
        game.apply_move(Direction::Right).expect("move");
        game.apply_ingredient(Ingredient::Apple).expect("placed");
        game.end_turn().expect("turn ends");
        assert!(!game.grid.contains_marker());
        assert_eq!(game.current_player(), Some(0));
    }

    #[test]
    fn test_game_over_blocks_actions() {
        let mut game = apple_diagonal_game();
        game.players[1].score = crate::config::scoring::WINNING_SCORE;
        assert_eq!(game.winner(), Some(1));
        assert_eq!(game.current_player(), None);
        assert_eq!(game.apply_move(Direction::Right), Err(CoreError::GameOver));
        assert_eq!(game.end_turn(), Err(CoreError::GameOver));
    }

    #[test]
    fn test_column_award_is_opt_in() {
        let mut grid = IngredientGrid::filled(BOARD_SIZE, Ingredient::Water);
        for row in 0..3 {
            grid.set(Position::new(row, 2), Ingredient::Toadstool);
        }
        let mut game = GameState::new(grid, TrackPositions::new(BOARD_SIZE), spawn_players());
        assert_eq!(game.apply_column_award(2, 0).map(|a| a.count), Some(3));
        assert!(game.players.iter().all(|p| p.score == 3));
        assert_eq!(game.apply_column_award(2, 4), None);
    }

    #[test]
    fn test_column_award_takes_column_first() {
        let mut grid = IngredientGrid::filled(BOARD_SIZE, Ingredient::Water);
        grid.set(Position::new(0, 4), Ingredient::Apple);
        grid.set(Position::new(4, 0), Ingredient::Lemon);
        for row in 1..4 {
            grid.set(Position::new(row, 4), Ingredient::Apple);
        }
        let mut game = GameState::new(grid, TrackPositions::new(BOARD_SIZE), spawn_players());

        let award = game.apply_column_award(4, 0).expect("award");
        assert_eq!((award.column, award.ingredient, award.count), (4, Ingredient::Apple, 4));
        assert_eq!(award, column_award(&game.grid, 4, 0).expect("award"));
    }

    #[test]
    fn test_resolve_requires_placement() {
        let mut game = apple_diagonal_game();
        assert_eq!(
            game.resolve_cascades(),
            Err(CoreError::OutOfPhase { expected: TurnPhase::Placed, actual: TurnPhase::Move })
        );
        game.apply_move(Direction::Right).expect("move");
        assert!(matches!(game.resolve_cascades(), Err(CoreError::OutOfPhase { .. })));

        game.apply_ingredient(Ingredient::Apple).expect("placed");
        game.resolve_cascades().expect("resolved");
        assert_eq!(
            game.resolve_cascades(),
            Err(CoreError::OutOfPhase { expected: TurnPhase::Placed, actual: TurnPhase::Resolved })
        );
    }

    #[test]
    fn test_resolve_after_win_is_rejected() {
        let mut game = apple_diagonal_game();
        game.apply_move(Direction::Right).expect("move");
        game.apply_ingredient(Ingredient::Apple).expect("placed");
        game.players[0].score = crate::config::scoring::WINNING_SCORE;
        let slots_before: Vec<_> = game.players.iter().map(|p| p.slot).collect();

        assert_eq!(game.resolve_cascades(), Err(CoreError::GameOver));
        assert!(game.grid.contains_marker());
        assert_eq!(game.players.iter().map(|p| p.slot).collect::<Vec<_>>(), slots_before);
    }
}
