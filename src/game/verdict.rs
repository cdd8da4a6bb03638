//! Verdict scoring
//!
//! Pure counting over the finished case file: no I/O here, the caller
//! renders the report.

use crate::data::{ClueSet, SuspectDirectory};

/// Matching clues needed to close the case
pub const EVIDENCE_THRESHOLD: usize = 2;

/// Outcome of an accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Two or more clues point at the accused
    CaseSolved,
    /// Exactly one clue points at the accused
    InsufficientEvidence,
    /// Nothing points at the accused
    WrongAccusation,
}

/// Scored accusation, ready for rendering
#[derive(Debug, Clone)]
pub struct VerdictReport {
    pub accused: String,
    /// Size of the case file, for context
    pub total_clues: usize,
    /// Clues whose suspect is the accused
    pub matches: usize,
    pub verdict: Verdict,
}

/// Score an accusation against the collected clues.
///
/// Every clue is looked up in the directory; a clue counts when its suspect
/// equals the accused name exactly (case-sensitive). Clues without an
/// association simply never count.
pub fn judge(clues: &ClueSet, directory: &SuspectDirectory, accused: &str) -> VerdictReport {
    let total_clues = clues.len();
    let matches = clues
        .iter()
        .filter(|clue| directory.lookup(clue) == Some(accused))
        .count();

    let verdict = if matches >= EVIDENCE_THRESHOLD {
        Verdict::CaseSolved
    } else if matches == 1 {
        Verdict::InsufficientEvidence
    } else {
        Verdict::WrongAccusation
    };

    VerdictReport {
        accused: accused.to_string(),
        total_clues,
        matches,
        verdict,
    }
}
