// Demo module for the game. Provides the terminal front end: board rendering
// and a stdin-driven `TurnInput` for local play.
pub mod console;
pub mod render;
