//! Core game logic and state management

pub mod exploration;
pub mod verdict;

use crate::console::Console;
use crate::data::{ClueSet, Mansion, SuspectDirectory};
use crate::Result;
use std::io::{BufRead, Write};

pub use exploration::{explore, ExplorationEnd};
pub use verdict::{judge, Verdict, VerdictReport};

/// The main game state: the mansion, the suspect directory, and the clues
/// collected so far
#[derive(Debug)]
pub struct Game {
    mansion: Mansion,
    suspects: SuspectDirectory,
    clues: ClueSet,
}

impl Game {
    /// Set up a fresh game from the embedded map and suspect tables
    pub fn new() -> Result<Self> {
        Ok(Self {
            mansion: Mansion::load()?,
            suspects: SuspectDirectory::load()?,
            clues: ClueSet::new(),
        })
    }

    /// The case file as collected so far
    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    /// Run one full game: explore, review the case file, accuse, judge.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<VerdictReport> {
        console.say("Construindo o mapa da mansao...")?;
        console.say(&format!(
            "Mapa construido com sucesso! {} comodos te aguardam.",
            self.mansion.room_count()
        ))?;
        console.say("Prepare-se para explorar a mansao...")?;
        console.blank()?;

        let end = explore(self.mansion.entrance(), &mut self.clues, console)?;
        match end {
            ExplorationEnd::DeadEnd => {
                console.say("A exploracao chegou ao fim.")?;
            }
            ExplorationEnd::Quit => {
                console.say("Voce volta ao Hall de Entrada com as pistas que tem.")?;
            }
        }
        console.blank()?;

        self.review_case_file(console)?;
        let accused = console.ask("\nQuem e o culpado?")?;
        let report = judge(&self.clues, &self.suspects, &accused);
        self.render_verdict(console, &report)?;
        Ok(report)
    }

    /// Print every collected clue in order, plus the total
    fn review_case_file<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.rule()?;
        console.say("           PISTAS COLETADAS")?;
        console.rule()?;
        if self.clues.is_empty() {
            console.say("Nenhuma pista foi coletada.")?;
        } else {
            for clue in &self.clues {
                console.say(&format!("  - {}", clue))?;
            }
        }
        console.say(&format!("Total de pistas: {}", self.clues.len()))?;
        Ok(())
    }

    fn render_verdict<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        report: &VerdictReport,
    ) -> Result<()> {
        console.blank()?;
        console.say(&format!(
            "Pistas que apontam para {}: {}",
            report.accused, report.matches
        ))?;
        match report.verdict {
            Verdict::CaseSolved => {
                console.say(&format!(
                    "CASO RESOLVIDO! {} era o culpado o tempo todo.",
                    report.accused
                ))?;
            }
            Verdict::InsufficientEvidence => {
                console.say("Evidencias insuficientes. Uma unica pista nao fecha o caso.")?;
            }
            Verdict::WrongAccusation => {
                console.say("Acusacao errada! Nenhuma pista aponta para essa pessoa.")?;
            }
        }
        Ok(())
    }
}
