//! th-core: Core game logic for Treasure Hunter
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: every randomized outcome is
//! driven by an injectable seeded RNG, and every action narrates into a
//! message buffer instead of printing.

pub mod difficulty;
pub mod hunter;
pub mod item;
pub mod shop;
pub mod terrain;
pub mod town;

mod consts;
mod gameloop;
mod rng;

pub use consts::*;
pub use gameloop::{Command, GameLoop, GameLoopResult, GameState};
pub use rng::GameRng;
