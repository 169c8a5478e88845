/// Pure game-logic functions.
///
/// Combat resolution never performs I/O.  The enemy's character is always
/// supplied by the caller (usually from `Enemy::select_attack`), so every
/// turn can be replayed deterministically in tests.

use rand::Rng;

use crate::entities::{
    AttackOutcome, Character, DefenceOutcome, Duel, Enemy, GameResult, Lives, Mode,
    ModeSettings, Player,
};
use crate::error::{GameError, Result};

// ── Comparison rule ───────────────────────────────────────────────────────────

/// Resolve one duel.  Each character beats the one numbered right after it
/// (wrapping 3 → 1), so the difference `attack - defense` is enough.
pub fn fight(attack: Character, defense: Character) -> Duel {
    match attack.number() - defense.number() {
        -1 | 2 => Duel::AttackerWins,
        -2 | 1 => Duel::DefenderWins,
        _ => Duel::Draw,
    }
}

/// Accept exactly `"1"`, `"2"` or `"3"`.
pub fn character_validation(input: &str) -> Result<Character> {
    let invalid = || GameError::InvalidInput(format!("'{}' is not a character number", input));
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    input
        .parse::<i32>()
        .ok()
        .and_then(Character::from_number)
        .ok_or_else(invalid)
}

// ── Constructors ──────────────────────────────────────────────────────────────

impl Player {
    pub fn new(name: impl Into<String>, mode: Mode, lives: u32) -> Self {
        Player {
            name: name.into(),
            lives,
            score: 0,
            mode,
        }
    }

    /// Lose one life.  `Lives::Depleted` marks the end of the session.
    pub fn decrease_lives(&mut self) -> Lives {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            Lives::Depleted
        } else {
            Lives::Remaining(self.lives)
        }
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            name: self.name.clone(),
            score: self.score,
            mode: self.mode,
        }
    }
}

impl Enemy {
    pub fn new(level: u32, settings: &ModeSettings) -> Self {
        Enemy {
            level,
            lives: level * settings.enemy_lives_multiplier,
        }
    }

    /// Uniform random pick — the only source of randomness in the game.
    pub fn select_attack(rng: &mut impl Rng) -> Character {
        Character::ALL[rng.gen_range(0..Character::ALL.len())]
    }

    pub fn decrease_lives(&mut self) -> Lives {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            Lives::Depleted
        } else {
            Lives::Remaining(self.lives)
        }
    }
}

// ── Turn resolution ───────────────────────────────────────────────────────────

/// Player attacks with `attack`, enemy defends with `defence`.
pub fn resolve_attack(
    player: &mut Player,
    enemy: &mut Enemy,
    attack: Character,
    defence: Character,
    settings: &ModeSettings,
) -> AttackOutcome {
    match fight(attack, defence) {
        Duel::Draw => AttackOutcome::Draw,
        Duel::DefenderWins => AttackOutcome::Missed,
        Duel::AttackerWins => {
            player.score += settings.player_add_score;
            match enemy.decrease_lives() {
                Lives::Remaining(_) => AttackOutcome::Hit,
                Lives::Depleted => AttackOutcome::EnemyDefeated,
            }
        }
    }
}

/// Enemy attacks with `attack`, player defends with `defence`.
pub fn resolve_defence(player: &mut Player, attack: Character, defence: Character) -> DefenceOutcome {
    match fight(attack, defence) {
        Duel::Draw => DefenceOutcome::Draw,
        Duel::DefenderWins => DefenceOutcome::Defended,
        Duel::AttackerWins => match player.decrease_lives() {
            Lives::Remaining(_) => DefenceOutcome::Hit,
            Lives::Depleted => DefenceOutcome::GameOver(player.result()),
        },
    }
}

/// Award the level-up bonus and build the next, tougher enemy.
pub fn level_up(player: &mut Player, defeated: &Enemy, settings: &ModeSettings) -> Enemy {
    player.score += settings.player_add_score_level_up;
    Enemy::new(defeated.level + 1, settings)
}
