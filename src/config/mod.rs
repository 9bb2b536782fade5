/// Main configuration module.
/// 
/// Re-exports submodules for board and scoring configuration.
pub mod game;
pub mod scoring;
