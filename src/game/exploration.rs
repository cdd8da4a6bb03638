//! Exploration engine
//!
//! Walks the player through the mansion one room at a time. Runs as an
//! iterative state machine over the current room rather than recursing, so a
//! stubborn stream of invalid input never grows the stack.

use crate::console::Console;
use crate::data::{ClueSet, Room};
use crate::Result;
use std::io::{BufRead, Write};

/// Direction chosen at a fork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Player command at an interior room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Go(Direction),
    Quit,
}

/// How a run through the mansion ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationEnd {
    /// Reached a room with no exits
    DeadEnd,
    /// The player chose to stop at a fork
    Quit,
}

/// Single-character direction tokens, case-insensitive: `e` esquerda,
/// `d` direita, `s` sair
fn parse_command(token: &str) -> Option<Command> {
    let mut chars = token.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match first.to_ascii_lowercase() {
        'e' => Some(Command::Go(Direction::Left)),
        'd' => Some(Command::Go(Direction::Right)),
        's' => Some(Command::Quit),
        _ => None,
    }
}

/// Walk the mansion from `entrance`, collecting clues into `clues`.
///
/// Ends when the player reaches a dead-end room or quits at a fork. Clues
/// gathered along the way stay in the set either way.
pub fn explore<R: BufRead, W: Write>(
    entrance: &Room,
    clues: &mut ClueSet,
    console: &mut Console<R, W>,
) -> Result<ExplorationEnd> {
    let mut room = entrance;

    loop {
        console.rule()?;
        console.say(&format!("Voce esta em: {}", room.name))?;
        console.rule()?;

        match &room.clue {
            Some(clue) => {
                clues.insert(clue);
                console.say(&format!("Voce encontrou uma pista: \"{}\"", clue))?;
            }
            None => console.say("Nenhuma pista neste comodo.")?,
        }

        if room.is_leaf() {
            console.blank()?;
            console.say("Esta sala nao possui mais saidas.")?;
            console.say("Voce chegou ao final deste caminho!")?;
            ask_to_continue(console)?;
            return Ok(ExplorationEnd::DeadEnd);
        }

        console.blank()?;
        console.say("Caminhos disponiveis:")?;
        if let Some(left) = &room.left {
            console.say(&format!("  [E] Esquerda -> {}", left.name))?;
        }
        if let Some(right) = &room.right {
            console.say(&format!("  [D] Direita  -> {}", right.name))?;
        }
        console.say("  [S] Sair da exploracao")?;
        console.blank()?;

        // Re-ask at the same room until the player picks an open exit or quits
        room = loop {
            let answer = console.ask("Para onde deseja ir?")?;
            match parse_command(&answer) {
                Some(Command::Go(Direction::Left)) => match &room.left {
                    Some(left) => {
                        console.say("\nVoce escolheu ir para a esquerda...\n")?;
                        break &**left;
                    }
                    None => console.say("\nNao ha caminho a esquerda! Tente novamente.\n")?,
                },
                Some(Command::Go(Direction::Right)) => match &room.right {
                    Some(right) => {
                        console.say("\nVoce escolheu ir para a direita...\n")?;
                        break &**right;
                    }
                    None => console.say("\nNao ha caminho a direita! Tente novamente.\n")?,
                },
                Some(Command::Quit) => {
                    console.say("\nVoce decidiu encerrar a exploracao.")?;
                    return Ok(ExplorationEnd::Quit);
                }
                None => console.say(
                    "\nOpcao invalida! Use 'E' para esquerda, 'D' para direita ou 'S' para sair.\n",
                )?,
            }
        };
    }
}

/// Dead-end rooms always end the run; the question only picks the farewell
/// line. Quirk kept from the original game.
fn ask_to_continue<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    loop {
        let answer = console.ask("Deseja continuar explorando? (s/n)")?;
        match answer.to_ascii_lowercase().as_str() {
            "s" => {
                console.say("Nao ha mais caminhos a partir daqui. Hora de acusar alguem.")?;
                return Ok(());
            }
            "n" => {
                console.say("Voce encerra a busca por pistas.")?;
                return Ok(());
            }
            _ => console.say("Responda 's' para sim ou 'n' para nao.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Mansion;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn collected(clues: &ClueSet) -> Vec<&str> {
        clues.iter().collect()
    }

    #[test]
    fn test_leftmost_walk_collects_three_clues() {
        let mansion = Mansion::load().unwrap();
        let mut clues = ClueSet::new();
        let mut console = scripted("e\ne\ne\nn\n");

        let end = explore(mansion.entrance(), &mut clues, &mut console).unwrap();

        assert_eq!(end, ExplorationEnd::DeadEnd);
        assert_eq!(
            collected(&clues),
            vec![
                "Faca com manchas suspeitas",
                "Porta arrombada por dentro",
                "Vela apagada encontrada no chao",
            ]
        );
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Voce esta em: Despensa"));
    }

    #[test]
    fn test_direction_tokens_are_case_insensitive() {
        let mansion = Mansion::load().unwrap();
        let mut clues = ClueSet::new();
        let mut console = scripted("E\nD\nS\n");

        let end = explore(mansion.entrance(), &mut clues, &mut console).unwrap();

        assert_eq!(end, ExplorationEnd::Quit);
        // Hall -> Sala de Estar -> Sala de Jantar, quit at the fork
        assert_eq!(
            collected(&clues),
            vec![
                "Taca de vinho quebrada",
                "Vela apagada encontrada no chao",
            ]
        );
    }

    #[test]
    fn test_invalid_token_reprompts_in_place() {
        let mansion = Mansion::load().unwrap();
        let mut clues = ClueSet::new();
        let mut console = scripted("x\nesquerda\n\ns\n");

        let end = explore(mansion.entrance(), &mut clues, &mut console).unwrap();

        assert_eq!(end, ExplorationEnd::Quit);
        assert!(clues.is_empty());
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Opcao invalida!").count(), 3);
        // never left the hall
        assert_eq!(out.matches("Voce esta em:").count(), 1);
    }

    #[test]
    fn test_blocked_direction_reprompts() {
        // Synthetic fork with only a right exit; the real map has none
        let fork = Room {
            name: "Corredor".to_string(),
            clue: None,
            left: None,
            right: Some(Box::new(Room {
                name: "Quarto".to_string(),
                clue: None,
                left: None,
                right: None,
            })),
        };
        let mut clues = ClueSet::new();
        let mut console = scripted("e\nd\ns\n");

        let end = explore(&fork, &mut clues, &mut console).unwrap();

        assert_eq!(end, ExplorationEnd::DeadEnd);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Nao ha caminho a esquerda!"));
        assert!(out.contains("Voce esta em: Quarto"));
    }

    #[test]
    fn test_dead_end_ends_run_for_either_answer() {
        let mansion = Mansion::load().unwrap();

        for answer in ["s", "S", "n", "N"] {
            let mut clues = ClueSet::new();
            let mut console = scripted(&format!("e\ne\ne\n{}\n", answer));
            let end = explore(mansion.entrance(), &mut clues, &mut console).unwrap();
            assert_eq!(end, ExplorationEnd::DeadEnd);
            assert_eq!(clues.len(), 3);
        }
    }

    #[test]
    fn test_dead_end_question_reprompts_on_garbage() {
        let mansion = Mansion::load().unwrap();
        let mut clues = ClueSet::new();
        let mut console = scripted("e\ne\ne\ntalvez\nn\n");

        let end = explore(mansion.entrance(), &mut clues, &mut console).unwrap();

        assert_eq!(end, ExplorationEnd::DeadEnd);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Responda 's' para sim ou 'n' para nao."));
    }

    #[test]
    fn test_path_state_matches_tree_path() {
        let mansion = Mansion::load().unwrap();
        let mut clues = ClueSet::new();
        let mut console = scripted("d\ne\nd\nn\n");

        explore(mansion.entrance(), &mut clues, &mut console).unwrap();

        // Hall -> Biblioteca -> Escritorio -> Sala de Reunioes
        let expected = mansion
            .entrance()
            .right
            .as_deref()
            .and_then(|r| r.left.as_deref())
            .and_then(|r| r.right.as_deref())
            .unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains(&format!("Voce esta em: {}", expected.name)));
        assert_eq!(expected.name, "Sala de Reunioes");
    }
}
