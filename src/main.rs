//! Main entry point for the console game.
//!
//! Initializes logging, seeds a new game and plays it on stdin/stdout.

use std::io;

use clap::Parser;
use log::info;

use potion_grid::game::demo::console::ConsoleInput;
use potion_grid::{run_game_loop, GameEnd, GameState};

#[derive(Debug, Parser)]
#[command(name = "potion-grid", about = "Two-player ingredient grid game")]
struct Args {
    /// Seed for the board; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the JSON game state after every turn
    #[arg(long, default_value_t = false)]
    snapshots: bool,
}

fn main() {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut state = GameState::initialize(seed);
    println!("Game start! (seed {})", seed);

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout(), args.snapshots);

    match run_game_loop(&mut state, &mut input) {
        GameEnd::Winner(winner) => {
            info!("[Main] game_id={} finished after {} turns", state.game_id, state.turn - 1);
            println!("Player {} wins with {} points!", state.players[winner].id, state.players[winner].score);
        }
        GameEnd::InputClosed => println!("Input closed, game abandoned."),
    }
}
