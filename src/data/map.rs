//! The mansion map: a fixed binary tree of rooms
//!
//! The layout ships with the binary as an embedded JSON table and is loaded
//! once at startup. After that the tree is read-only; exploration only ever
//! borrows rooms.

use crate::{GameError, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// Embedded map table. The nested JSON mirrors the tree shape, so it
/// deserializes straight into `Room`.
const MANSION_TABLE: &str = include_str!("../../assets/mansion.json");

/// One room of the mansion, owning its two possible exits
#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    /// Display name, unique within the mansion
    pub name: String,

    /// Clue hidden in this room, if any
    #[serde(default)]
    pub clue: Option<String>,

    /// Room behind the left exit
    #[serde(default)]
    pub left: Option<Box<Room>>,

    /// Room behind the right exit
    #[serde(default)]
    pub right: Option<Box<Room>>,
}

impl Room {
    /// A room with no exits ends the exploration
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The whole mansion, rooted at the entrance hall
#[derive(Debug, Clone)]
pub struct Mansion {
    root: Room,
}

impl Mansion {
    /// Load and validate the embedded map table
    pub fn load() -> Result<Self> {
        let root: Room = serde_json::from_str(MANSION_TABLE)
            .map_err(|e| GameError::CorruptedMap(e.to_string()))?;

        {
            let mut seen = HashSet::new();
            check_names(&root, &mut seen)?;
        }

        Ok(Self { root })
    }

    /// The entrance hall
    pub fn entrance(&self) -> &Room {
        &self.root
    }

    /// Total number of rooms in the mansion
    pub fn room_count(&self) -> usize {
        fn count(room: &Room) -> usize {
            1 + room.left.as_deref().map_or(0, count) + room.right.as_deref().map_or(0, count)
        }
        count(&self.root)
    }
}

/// Room names double as identifiers in messages, so duplicates are a data bug
fn check_names<'a>(room: &'a Room, seen: &mut HashSet<&'a str>) -> Result<()> {
    if !seen.insert(&room.name) {
        return Err(GameError::CorruptedMap(format!("duplicate room name: {}", room.name)).into());
    }
    if let Some(left) = &room.left {
        check_names(left, seen)?;
    }
    if let Some(right) = &room.right {
        check_names(right, seen)?;
    }
    Ok(())
}
