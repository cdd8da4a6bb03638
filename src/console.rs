//! Terminal prompts and player input
//!
//! The engines never touch stdin/stdout directly; they talk to a [`Console`]
//! generic over its reader and writer, so scripted games in tests run over
//! in-memory buffers.

use crate::{GameError, Result};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Width of the separator rules framing room names and banners
const RULE_WIDTH: usize = 40;

/// One side of the conversation with the player
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the real terminal
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line of status text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print a separator rule
    pub fn rule(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    /// Ask a question and block for one line of input.
    ///
    /// Returns the answer with surrounding whitespace trimmed. A closed
    /// input stream while a prompt is open is fatal.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(GameError::InputClosed.into());
        }
        Ok(answer.trim().to_string())
    }

    /// Consume the console and hand back its writer, for inspecting output
    /// in tests
    pub fn into_output(self) -> W {
        self.output
    }
}
