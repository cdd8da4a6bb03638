//! Detetive Quest
//!
//! A terminal detective adventure: explore the mansion, collect the clues,
//! accuse the culprit.

use detective_quest::console::Console;
use detective_quest::{Game, Result};

fn main() -> Result<()> {
    let mut console = Console::stdio();

    console.rule()?;
    console.say("     DETETIVE QUEST - MAPA DA MANSAO")?;
    console.rule()?;
    console.blank()?;

    let mut game = Game::new()?;
    game.play(&mut console)?;

    console.blank()?;
    console.rule()?;
    console.say("Obrigado por jogar Detetive Quest!")?;
    console.rule()?;

    Ok(())
}
