/// Command surface: reads top-level commands and runs sessions until `exit`
/// or end of input.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::commands::{action_distributor, Command};
use crate::display;
use crate::entities::GameResult;
use crate::error::{GameError, Result};
use crate::mode::GameConfig;
use crate::scores::{ScoreBoard, ScoreEntry};
use crate::session::{read_line, Session, SessionEnd};

pub struct App {
    config: GameConfig,
    board: ScoreBoard,
    /// Set when the mode came from the command line; skips the mode prompt.
    mode_fixed: bool,
}

impl App {
    pub fn new(config: GameConfig, board: ScoreBoard) -> Self {
        App {
            config,
            board,
            mode_fixed: false,
        }
    }

    pub fn with_fixed_mode(mut self) -> Self {
        self.mode_fixed = true;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        rng: &mut impl Rng,
    ) -> Result<()> {
        display::welcome(out)?;
        loop {
            display::prompt(out, "> ")?;
            let Some(text) = read_line(input)? else {
                break;
            };
            let command = match action_distributor(&text) {
                Ok(command) => command,
                Err(GameError::InvalidInput(_)) => {
                    display::invalid_command(out, &text)?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            tracing::debug!(command = command.word(), "dispatching");
            if !self.dispatch(command, input, out, rng)? {
                break;
            }
        }
        display::goodbye(out)?;
        Ok(())
    }

    /// Returns `false` once the program should stop.
    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        out: &mut W,
        rng: &mut impl Rng,
    ) -> Result<bool> {
        match command {
            Command::Start => self.start(input, out, rng)?,
            Command::Scores => match self.board.raw() {
                Ok(raw) => display::scores(out, raw.as_deref())?,
                Err(e) => {
                    tracing::error!(path = %self.board.path().display(), "reading scores failed: {}", e);
                    display::scores_unavailable(out, &e.to_string())?;
                }
            },
            Command::Help => display::help(out)?,
            Command::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn start<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        rng: &mut impl Rng,
    ) -> Result<()> {
        let Some(name) = self.ask_name(input, out)? else {
            return Ok(());
        };
        if !self.mode_fixed && !self.ask_mode(input, out)? {
            return Ok(());
        }

        let mut session = Session::new(name, &self.config);
        match session.run(input, out, rng)? {
            SessionEnd::GameOver(result) => self.finish(out, &result)?,
            SessionEnd::Abandoned => {}
        }
        Ok(())
    }

    fn ask_name<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<Option<String>> {
        loop {
            display::prompt(out, "Enter your name: ")?;
            match read_line(input)? {
                None => return Ok(None),
                Some(name) if name.is_empty() => continue,
                Some(name) => return Ok(Some(name)),
            }
        }
    }

    /// `false` means input ended before a mode was chosen.
    fn ask_mode<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<bool> {
        loop {
            display::prompt(out, "Choose mode (easy / normal / hard): ")?;
            let Some(text) = read_line(input)? else {
                return Ok(false);
            };
            match self.config.game_mode_switch(&text) {
                Ok(_) => return Ok(true),
                Err(GameError::InvalidInput(_)) => display::invalid_mode(out)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the result and persist it.  A failed save is reported, not fatal.
    fn finish<W: Write>(&self, out: &mut W, result: &GameResult) -> Result<()> {
        display::game_result(out, result)?;
        match self.board.record(ScoreEntry::now(result)) {
            Ok(rank) => display::saved(out, rank)?,
            Err(e) => {
                tracing::error!(path = %self.board.path().display(), "saving score failed: {}", e);
                display::save_failed(out, &e.to_string())?;
            }
        }
        Ok(())
    }
}
