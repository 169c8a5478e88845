/// All game entity types — pure data, no logic.

use std::fmt;

// ── Characters ────────────────────────────────────────────────────────────────

/// The three fighters a combatant can pick for a duel.
///
/// The numeric values are what the player types at the prompt.  Each
/// character beats the next one in the cycle 1 → 2 → 3 → 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Character {
    Wizard = 1,
    Warrior = 2,
    Brigand = 3,
}

impl Character {
    pub const ALL: [Character; 3] = [Character::Wizard, Character::Warrior, Character::Brigand];

    pub fn number(self) -> i32 {
        self as i32
    }

    pub fn from_number(n: i32) -> Option<Character> {
        match n {
            1 => Some(Character::Wizard),
            2 => Some(Character::Warrior),
            3 => Some(Character::Brigand),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Character::Wizard => "WIZARD",
            Character::Warrior => "WARRIOR",
            Character::Brigand => "BRIGAND",
        }
    }
}

/// Result of a single attack-vs-defence comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duel {
    AttackerWins,
    DefenderWins,
    Draw,
}

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Easy,
    Normal,
    Hard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Normal, Mode::Hard];

    /// Canonical upper-case name, as stored in the leaderboard.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Easy => "EASY",
            Mode::Normal => "NORMAL",
            Mode::Hard => "HARD",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunables of one difficulty preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeSettings {
    /// Score awarded for every successful attack.
    pub player_add_score: u32,
    /// Bonus awarded when an enemy is defeated.
    pub player_add_score_level_up: u32,
    /// Enemy lives = level × this.
    pub enemy_lives_multiplier: u32,
}

// ── Combatants ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub lives: u32,
    pub score: u32,
    pub mode: Mode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub level: u32,
    pub lives: u32,
}

/// What is left after a combatant loses a life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lives {
    Remaining(u32),
    Depleted,
}

// ── Turn outcomes ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    Draw,
    Missed,
    /// The enemy lost a life but is still standing.
    Hit,
    EnemyDefeated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefenceOutcome {
    Draw,
    Defended,
    /// The player lost a life but is still standing.
    Hit,
    GameOver(GameResult),
}

/// Final state of a player whose lives ran out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub name: String,
    pub score: u32,
    pub mode: Mode,
}
