//! The suspect directory: which clue points at which suspect
//!
//! A fixed-size hash table with separate chaining. Chaining keeps insertion
//! O(1) and needs no tombstone bookkeeping, and the table never deletes.
//! Lookups only need exact matches, so hash quality affects speed, not
//! correctness.

use crate::{GameError, Result};
use serde::Deserialize;

/// Embedded association table, in insertion order
const SUSPECT_TABLE: &str = include_str!("../../assets/suspects.json");

/// Number of hash buckets, fixed for the lifetime of the table
const BUCKET_COUNT: usize = 20;

/// One row of the embedded association table
#[derive(Debug, Clone, Deserialize)]
struct Association {
    clue: String,
    suspect: String,
}

/// One entry of a bucket chain
#[derive(Debug, Clone)]
struct ChainEntry {
    clue: String,
    suspect: String,
    next: Option<Box<ChainEntry>>,
}

/// Hash table mapping clue text to suspect name
#[derive(Debug, Clone)]
pub struct SuspectDirectory {
    buckets: Vec<Option<Box<ChainEntry>>>,
}

/// Sum of the byte values of the clue text, folded into the bucket range
fn bucket_for(clue: &str) -> usize {
    let sum: usize = clue.bytes().map(usize::from).sum();
    sum % BUCKET_COUNT
}

impl SuspectDirectory {
    /// An empty directory with all buckets free
    pub fn new() -> Self {
        Self {
            buckets: (0..BUCKET_COUNT).map(|_| None).collect(),
        }
    }

    /// Load the directory from the embedded association table
    pub fn load() -> Result<Self> {
        let associations: Vec<Association> = serde_json::from_str(SUSPECT_TABLE)
            .map_err(|e| GameError::CorruptedSuspects(e.to_string()))?;

        let mut directory = Self::new();
        for assoc in &associations {
            directory.insert(&assoc.clue, &assoc.suspect);
        }
        Ok(directory)
    }

    /// Associate a clue with a suspect.
    ///
    /// Prepends to the bucket chain without checking for an existing entry;
    /// on duplicate clues the most recent insertion shadows the older one.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = bucket_for(clue);
        let entry = Box::new(ChainEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: self.buckets[bucket].take(),
        });
        self.buckets[bucket] = Some(entry);
    }

    /// The suspect a clue points at, if the clue is known.
    ///
    /// Scans the chain head to tail and returns the first exact match.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut entry = self.buckets[bucket_for(clue)].as_deref();
        while let Some(e) = entry {
            if e.clue == clue {
                return Some(&e.suspect);
            }
            entry = e.next.as_deref();
        }
        None
    }
}

impl Default for SuspectDirectory {
    fn default() -> Self {
        Self::new()
    }
}
