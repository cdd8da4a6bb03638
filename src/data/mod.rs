//! Data structures for the game world
//!
//! The mansion map the player walks, the case file of collected clues, and
//! the directory tying clues to suspects.

pub mod clues;
pub mod map;
pub mod suspects;

pub use clues::ClueSet;
pub use map::{Mansion, Room};
pub use suspects::SuspectDirectory;
