/// Difficulty presets and the active game configuration.
///
/// `GameConfig` is passed by value into every session; switching modes only
/// affects players and enemies created afterwards.

use crate::entities::{Mode, ModeSettings};
use crate::error::{GameError, Result};

/// Lives a player starts with unless overridden on the command line.
pub const PLAYER_LIVES: u32 = 5;

// ── Preset table ──────────────────────────────────────────────────────────────

pub fn preset(mode: Mode) -> ModeSettings {
    match mode {
        Mode::Easy => ModeSettings {
            player_add_score: 1,
            player_add_score_level_up: 3,
            enemy_lives_multiplier: 1,
        },
        Mode::Normal => ModeSettings {
            player_add_score: 1,
            player_add_score_level_up: 5,
            enemy_lives_multiplier: 1,
        },
        Mode::Hard => ModeSettings {
            player_add_score: 3,
            player_add_score_level_up: 15,
            enemy_lives_multiplier: 3,
        },
    }
}

/// Normalise a free-text mode name (`" hard "`, `"Hard"`) to a known preset.
pub fn validation_mode(text: &str) -> Result<Mode> {
    let normalized = text.trim().to_uppercase();
    Mode::ALL
        .into_iter()
        .find(|m| m.name() == normalized)
        .ok_or_else(|| {
            GameError::InvalidInput(format!(
                "unknown mode '{}', expected one of: easy, normal, hard",
                text.trim()
            ))
        })
}

// ── Active configuration ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    mode: Mode,
    settings: ModeSettings,
    pub player_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Mode::Normal, PLAYER_LIVES)
    }
}

impl GameConfig {
    pub fn new(mode: Mode, player_lives: u32) -> Self {
        Self {
            mode,
            settings: preset(mode),
            player_lives,
        }
    }

    /// Validate `text` and make its preset the active one.
    ///
    /// Returns the canonical mode on success; the config is left untouched
    /// on invalid input.
    pub fn game_mode_switch(&mut self, text: &str) -> Result<Mode> {
        let mode = validation_mode(text)?;
        self.mode = mode;
        self.settings = preset(mode);
        tracing::info!(mode = %mode, settings = ?self.settings, "game mode switched");
        Ok(mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active(&self) -> ModeSettings {
        self.settings
    }
}
