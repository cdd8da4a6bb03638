//! Detetive Quest
//!
//! A terminal detective adventure: explore a mansion laid out as a binary
//! tree, gather the clues hidden in its rooms, and accuse the culprit.
//!
//! # Game Mechanics
//!
//! - **Exploration**: walk the mansion left/right from the entrance hall
//! - **Clues**: rooms hide clues that are collected into an ordered case file
//! - **Accusation**: clues point at suspects; two matching clues close the case
//!
//! # Architecture
//!
//! - `data` - The mansion map, the collected-clue set, the suspect directory
//! - `game` - Exploration loop and verdict scoring
//! - `console` - Terminal prompts and player input

pub mod console;
pub mod data;
pub mod game;

pub use data::{ClueSet, Mansion, Room, SuspectDirectory};
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Mansion map data corrupted: {0}")]
    CorruptedMap(String),

    #[error("Suspect association data corrupted: {0}")]
    CorruptedSuspects(String),

    #[error("Player input stream closed")]
    InputClosed,
}
