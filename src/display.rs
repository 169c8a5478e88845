/// Rendering layer — all terminal text output lives here.
///
/// Each function receives a mutable writer and an immutable view of some
/// game value.  No game logic is performed; this module only translates
/// values into coloured lines.

use std::io::Write;

use crossterm::{
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::entities::{AttackOutcome, Character, DefenceOutcome, Enemy, GameResult, Mode, Player};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_PROMPT: Color = Color::White;
const C_GOOD: Color = Color::Green;
const C_BAD: Color = Color::Red;
const C_DRAW: Color = Color::Yellow;
const C_HUD: Color = Color::DarkGrey;
const C_RESULT: Color = Color::Magenta;

pub const HELP_TEXT: &str = "'start'  --> enter to start the game.\n\
                             'scores' --> enter to show  scores.\n\
                             'exit'   --> enter to exit the game.";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line<W: Write>(out: &mut W, color: Color, text: &str) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    out.queue(style::ResetColor)?;
    out.queue(Print("\n"))?;
    out.flush()
}

/// Print a prompt without a trailing newline.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PROMPT))?;
    out.queue(Print(text))?;
    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Command surface ───────────────────────────────────────────────────────────

pub fn welcome<W: Write>(out: &mut W) -> std::io::Result<()> {
    line(out, C_TITLE, "⚔  WIZARD · WARRIOR · BRIGAND  ⚔")?;
    line(out, C_HUD, "Type 'help' to see the available commands.")
}

pub fn help<W: Write>(out: &mut W) -> std::io::Result<()> {
    line(out, C_PROMPT, HELP_TEXT)
}

pub fn invalid_command<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    line(out, C_BAD, &format!("Unknown command '{}'. Type 'help'.", text.trim()))
}

pub fn invalid_mode<W: Write>(out: &mut W) -> std::io::Result<()> {
    let names: Vec<&str> = Mode::ALL.iter().map(|m| m.name()).collect();
    line(out, C_BAD, &format!("Invalid mode. Choose one of: {}", names.join(", ")))
}

pub fn scores<W: Write>(out: &mut W, raw: Option<&str>) -> std::io::Result<()> {
    match raw {
        Some(contents) if !contents.trim().is_empty() => {
            line(out, C_PROMPT, contents.trim_end())
        }
        _ => line(out, C_HUD, "No scores yet."),
    }
}

pub fn scores_unavailable<W: Write>(out: &mut W, reason: &str) -> std::io::Result<()> {
    line(out, C_BAD, &format!("Could not read scores: {}", reason))
}

pub fn goodbye<W: Write>(out: &mut W) -> std::io::Result<()> {
    line(out, C_HUD, "Goodbye!")
}

// ── In-game ───────────────────────────────────────────────────────────────────

pub fn invalid_character<W: Write>(out: &mut W) -> std::io::Result<()> {
    let mut text = String::from("\nInvalid input :(\nYou must choose one of the following characters:");
    for c in Character::ALL {
        text.push_str(&format!("\n{} --> {}", c.number(), c.label()));
    }
    line(out, C_BAD, &text)
}

pub fn session_start<W: Write>(out: &mut W, player: &Player, enemy: &Enemy) -> std::io::Result<()> {
    line(
        out,
        C_TITLE,
        &format!(
            "\n{} enters the arena on {}. A level {} enemy ({} lives) awaits.",
            player.name, player.mode, enemy.level, enemy.lives
        ),
    )
}

pub fn status<W: Write>(out: &mut W, player: &Player, enemy: &Enemy) -> std::io::Result<()> {
    line(
        out,
        C_HUD,
        &format!(
            "Lives: {}  Score: {}  │  Enemy level {} ({} lives)",
            player.lives, player.score, enemy.level, enemy.lives
        ),
    )
}

pub fn attack_outcome<W: Write>(out: &mut W, outcome: AttackOutcome) -> std::io::Result<()> {
    match outcome {
        AttackOutcome::Draw => line(out, C_DRAW, "It's a draw!"),
        AttackOutcome::Missed => line(out, C_BAD, "You missed!"),
        AttackOutcome::Hit | AttackOutcome::EnemyDefeated => {
            line(out, C_GOOD, "You attacked successfully!")
        }
    }
}

pub fn defence_outcome<W: Write>(out: &mut W, outcome: &DefenceOutcome) -> std::io::Result<()> {
    match outcome {
        DefenceOutcome::Draw => line(out, C_DRAW, "It's a draw!"),
        DefenceOutcome::Defended => line(out, C_GOOD, "You defended successfully!"),
        DefenceOutcome::Hit | DefenceOutcome::GameOver(_) => {
            line(out, C_BAD, "The enemy hit you!")
        }
    }
}

pub fn enemy_defeated<W: Write>(out: &mut W, bonus: u32, next: &Enemy) -> std::io::Result<()> {
    line(
        out,
        C_GOOD,
        &format!(
            "Enemy defeated! +{} points. A level {} enemy ({} lives) approaches.",
            bonus, next.level, next.lives
        ),
    )
}

// ── Game over ─────────────────────────────────────────────────────────────────

pub fn game_result<W: Write>(out: &mut W, result: &GameResult) -> std::io::Result<()> {
    line(
        out,
        C_RESULT,
        &format!(
            "\nPLAYER --> {}\nSCORE  --> {}\nMODE   --> {}",
            result.name, result.score, result.mode
        ),
    )
}

pub fn saved<W: Write>(out: &mut W, rank: Option<usize>) -> std::io::Result<()> {
    match rank {
        Some(r) => line(out, C_TITLE, &format!("You placed #{} on the leaderboard!", r)),
        None => line(out, C_HUD, "Not enough for the top 10 this time."),
    }
}

pub fn save_failed<W: Write>(out: &mut W, reason: &str) -> std::io::Result<()> {
    line(out, C_BAD, &format!("Could not save your score: {}", reason))
}
