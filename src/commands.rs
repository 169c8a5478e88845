/// Top-level commands typed at the main prompt.

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Scores,
    Help,
    Exit,
}

impl Command {
    pub fn word(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Scores => "scores",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// Map a typed word to a command.  Case and surrounding whitespace are
/// ignored; anything unknown is `InvalidInput`.
pub fn action_distributor(text: &str) -> Result<Command> {
    match text.trim().to_lowercase().as_str() {
        "start" => Ok(Command::Start),
        "scores" => Ok(Command::Scores),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(GameError::InvalidInput(format!("unknown command '{}'", text.trim()))),
    }
}
