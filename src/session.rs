/// One play-through: from the first enemy to the player's last life.
///
/// A round is the player's attack followed by the player's defence.  When an
/// enemy falls the round ends early and a stronger enemy takes its place.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::compute::{character_validation, level_up, resolve_attack, resolve_defence};
use crate::display;
use crate::entities::{AttackOutcome, Character, DefenceOutcome, Enemy, GameResult, ModeSettings, Player};
use crate::error::Result;
use crate::mode::GameConfig;

/// How a session stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver(GameResult),
    /// Input closed mid-game; nothing is persisted.
    Abandoned,
}

// ── Input helpers ─────────────────────────────────────────────────────────────

/// Read one trimmed line.  `None` means end of input.
///
/// Bytes that are not UTF-8 become U+FFFD, so they fail validation and
/// re-prompt like any other bad input.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Prompt until a valid character number is typed.
pub fn read_character<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<Character>> {
    loop {
        display::prompt(out, text)?;
        let Some(raw) = read_line(input)? else {
            return Ok(None);
        };
        match character_validation(&raw) {
            Ok(character) => return Ok(Some(character)),
            Err(e) => {
                tracing::debug!("rejected character: {}", e);
                display::invalid_character(out)?;
            }
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Session {
    player: Player,
    enemy: Enemy,
    settings: ModeSettings,
}

impl Session {
    pub fn new(name: impl Into<String>, config: &GameConfig) -> Self {
        let settings = config.active();
        Session {
            player: Player::new(name, config.mode(), config.player_lives),
            enemy: Enemy::new(1, &settings),
            settings,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Play until the player runs out of lives or input ends.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        rng: &mut impl Rng,
    ) -> Result<SessionEnd> {
        tracing::info!(player = %self.player.name, mode = %self.player.mode, "session started");
        display::session_start(out, &self.player, &self.enemy)?;

        loop {
            if let Some(end) = self.play_round(input, out, rng)? {
                match &end {
                    SessionEnd::GameOver(result) => {
                        tracing::info!(player = %result.name, score = result.score, "game over")
                    }
                    SessionEnd::Abandoned => tracing::info!("session abandoned"),
                }
                return Ok(end);
            }
        }
    }

    /// One attack plus one defence.  `None` means the session goes on.
    pub fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        rng: &mut impl Rng,
    ) -> Result<Option<SessionEnd>> {
        display::status(out, &self.player, &self.enemy)?;

        // ── Attack ───────────────────────────────────────────────────────────
        let Some(attack) = read_character(input, out, "Enter attack: ")? else {
            return Ok(Some(SessionEnd::Abandoned));
        };
        let defence = Enemy::select_attack(rng);
        let outcome = resolve_attack(&mut self.player, &mut self.enemy, attack, defence, &self.settings);
        tracing::debug!(?attack, ?defence, ?outcome, "attack resolved");
        display::attack_outcome(out, outcome)?;

        if outcome == AttackOutcome::EnemyDefeated {
            self.enemy = level_up(&mut self.player, &self.enemy, &self.settings);
            tracing::debug!(level = self.enemy.level, lives = self.enemy.lives, "enemy spawned");
            display::enemy_defeated(out, self.settings.player_add_score_level_up, &self.enemy)?;
            return Ok(None);
        }

        // ── Defence ──────────────────────────────────────────────────────────
        let Some(defence) = read_character(input, out, "Enter defence: ")? else {
            return Ok(Some(SessionEnd::Abandoned));
        };
        let attack = Enemy::select_attack(rng);
        let outcome = resolve_defence(&mut self.player, attack, defence);
        tracing::debug!(?attack, ?defence, ?outcome, "defence resolved");
        display::defence_outcome(out, &outcome)?;

        match outcome {
            DefenceOutcome::GameOver(result) => Ok(Some(SessionEnd::GameOver(result))),
            _ => Ok(None),
        }
    }
}
