use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use duel_game::app::App;
use duel_game::display;
use duel_game::entities::{AttackOutcome, Character, DefenceOutcome, GameResult, Mode};
use duel_game::mode::GameConfig;
use duel_game::scores::ScoreBoard;
use duel_game::session::*;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn repeated(line: &str, times: usize) -> String {
    format!("{}\n", line).repeat(times)
}

fn text(out: &[u8]) -> String {
    String::from_utf8_lossy(out).into_owned()
}

// ── Input helpers ─────────────────────────────────────────────────────────────

#[test]
fn read_line_trims_and_reports_eof() {
    let mut input = Cursor::new("  hello \n");
    assert_eq!(read_line(&mut input).unwrap(), Some("hello".to_string()));
    assert_eq!(read_line(&mut input).unwrap(), None);
}

#[test]
fn read_character_reprompts_until_valid() {
    let mut input = Cursor::new("five\n0\n\n2\n");
    let mut out = Vec::new();
    let c = read_character(&mut input, &mut out, "Enter attack: ").unwrap();
    assert_eq!(c, Some(Character::Warrior));

    let shown = text(&out);
    assert_eq!(shown.matches("Invalid input :(").count(), 3);
    assert!(shown.contains("1 --> WIZARD\n2 --> WARRIOR\n3 --> BRIGAND"));
    assert_eq!(shown.matches("Enter attack: ").count(), 4);
}

#[test]
fn read_character_eof_is_none() {
    let mut input = Cursor::new("x\n");
    let mut out = Vec::new();
    assert_eq!(read_character(&mut input, &mut out, "> ").unwrap(), None);
}

#[test]
fn read_character_reprompts_on_non_utf8_bytes() {
    let mut input = Cursor::new(b"\xff\n2\n".to_vec());
    let mut out = Vec::new();
    let c = read_character(&mut input, &mut out, "Enter attack: ").unwrap();
    assert_eq!(c, Some(Character::Warrior));
    assert_eq!(text(&out).matches("Invalid input :(").count(), 1);
}

// ── Outcome messages ──────────────────────────────────────────────────────────

fn attack_text(outcome: AttackOutcome) -> String {
    let mut out = Vec::new();
    display::attack_outcome(&mut out, outcome).unwrap();
    text(&out)
}

fn defence_text(outcome: DefenceOutcome) -> String {
    let mut out = Vec::new();
    display::defence_outcome(&mut out, &outcome).unwrap();
    text(&out)
}

#[test]
fn attack_outcome_messages() {
    assert!(attack_text(AttackOutcome::Draw).contains("It's a draw!"));
    assert!(attack_text(AttackOutcome::Missed).contains("You missed!"));
    assert!(attack_text(AttackOutcome::Hit).contains("You attacked successfully!"));
    assert!(attack_text(AttackOutcome::EnemyDefeated).contains("You attacked successfully!"));
}

#[test]
fn defence_outcome_messages() {
    assert!(defence_text(DefenceOutcome::Draw).contains("It's a draw!"));
    assert!(defence_text(DefenceOutcome::Defended).contains("You defended successfully!"));
    assert!(defence_text(DefenceOutcome::Hit).contains("The enemy hit you!"));
    let over = DefenceOutcome::GameOver(GameResult {
        name: "user".to_string(),
        score: 0,
        mode: Mode::Hard,
    });
    assert!(defence_text(over).contains("The enemy hit you!"));
}

#[test]
fn played_rounds_report_every_outcome() {
    // Plenty of lives so every outcome shows up before the game ends.
    let config = GameConfig::new(Mode::Hard, 20);
    let mut session = Session::new("user", &config);
    let mut input = Cursor::new(repeated("1", 5000));
    let mut out = Vec::new();
    session.run(&mut input, &mut out, &mut seeded_rng()).unwrap();

    let shown = text(&out);
    for message in [
        "It's a draw!",
        "You missed!",
        "You attacked successfully!",
        "You defended successfully!",
        "The enemy hit you!",
    ] {
        assert!(shown.contains(message), "missing {:?}", message);
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn new_session_uses_config() {
    let config = GameConfig::new(Mode::Hard, 3);
    let session = Session::new("user", &config);
    assert_eq!(session.player().lives, 3);
    assert_eq!(session.player().mode, Mode::Hard);
    assert_eq!(session.enemy().level, 1);
    assert_eq!(session.enemy().lives, 3);
}

#[test]
fn session_runs_until_game_over() {
    let config = GameConfig::new(Mode::Normal, 5);
    let mut session = Session::new("user", &config);
    let mut input = Cursor::new(repeated("1", 5000));
    let mut out = Vec::new();

    let end = session.run(&mut input, &mut out, &mut seeded_rng()).unwrap();
    let SessionEnd::GameOver(result) = end else {
        panic!("expected game over, got {:?}", end);
    };
    assert_eq!(result.name, "user");
    assert_eq!(result.mode, Mode::Normal);
    assert_eq!(result.score, session.player().score);
    assert_eq!(session.player().lives, 0);
    assert!(text(&out).contains("The enemy hit you!"));
}

#[test]
fn score_accounts_for_hits_and_level_ups() {
    // Normal mode: 1 point per hit, 5 per defeated enemy, and every hit
    // on a level-L enemy (1 life per level) brings it closer to defeat.
    let config = GameConfig::new(Mode::Normal, 5);
    let mut session = Session::new("user", &config);
    let mut input = Cursor::new(repeated("2", 5000));
    let mut out = Vec::new();
    session.run(&mut input, &mut out, &mut seeded_rng()).unwrap();

    let level = session.enemy().level;
    let defeated = level - 1;
    let hits_on_defeated: u32 = (1..level).sum();
    let hits_on_current = level - session.enemy().lives;
    let expected = hits_on_defeated + hits_on_current + 5 * defeated;
    assert_eq!(session.player().score, expected);
}

#[test]
fn same_seed_same_game() {
    let config = GameConfig::new(Mode::Hard, 5);
    let play = || {
        let mut session = Session::new("user", &config);
        let mut input = Cursor::new(repeated("3", 5000));
        let mut out = Vec::new();
        session.run(&mut input, &mut out, &mut seeded_rng()).unwrap()
    };
    assert_eq!(play(), play());
}

#[test]
fn session_abandoned_when_input_ends() {
    let config = GameConfig::default();
    let mut session = Session::new("user", &config);
    let mut input = Cursor::new("1\n");
    let mut out = Vec::new();
    let end = session.run(&mut input, &mut out, &mut seeded_rng()).unwrap();
    assert_eq!(end, SessionEnd::Abandoned);
}

// ── App ───────────────────────────────────────────────────────────────────────

fn app_in(dir: &TempDir) -> App {
    App::new(GameConfig::default(), ScoreBoard::new(dir.path().join("scores.txt")))
}

#[test]
fn help_scores_and_exit() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut input = Cursor::new(" Help \nscores\nxyz\nexit\nstart\n");
    let mut out = Vec::new();
    app.run(&mut input, &mut out, &mut seeded_rng()).unwrap();

    let shown = text(&out);
    assert!(shown.contains("'start'  --> enter to start the game."));
    assert!(shown.contains("No scores yet."));
    assert!(shown.contains("Unknown command 'xyz'"));
    assert!(shown.contains("Goodbye!"));
    // `start` after `exit` is never read
    assert!(!shown.contains("Enter your name"));
}

#[test]
fn full_game_is_saved_to_leaderboard() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let script = format!("start\n\nalice\nimpossible\nhard\n{}", repeated("1", 5000));
    let mut input = Cursor::new(script);
    let mut out = Vec::new();
    app.run(&mut input, &mut out, &mut seeded_rng()).unwrap();

    let shown = text(&out);
    assert!(shown.contains("Invalid mode."));
    assert!(shown.contains("PLAYER --> alice"));
    assert!(shown.contains("MODE   --> HARD"));
    assert!(shown.contains("You placed #1 on the leaderboard!"));
    assert_eq!(app.config().mode(), Mode::Hard);

    let board = ScoreBoard::new(dir.path().join("scores.txt"));
    let entries = board.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "alice");
    assert_eq!(entries[0].mode, "HARD");
}

#[test]
fn non_utf8_command_is_rejected_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut input = Cursor::new(b"caf\xe9\nexit\n".to_vec());
    let mut out = Vec::new();
    app.run(&mut input, &mut out, &mut seeded_rng()).unwrap();

    let shown = text(&out);
    assert!(shown.contains("Unknown command 'caf\u{fffd}'"));
    assert!(shown.contains("Goodbye!"));
}

#[test]
fn fixed_mode_skips_mode_prompt() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(
        GameConfig::new(Mode::Easy, 1),
        ScoreBoard::new(dir.path().join("scores.txt")),
    )
    .with_fixed_mode();
    let script = format!("start\nbob\n{}", repeated("2", 5000));
    let mut input = Cursor::new(script);
    let mut out = Vec::new();
    app.run(&mut input, &mut out, &mut seeded_rng()).unwrap();

    let shown = text(&out);
    assert!(!shown.contains("Choose mode"));
    assert!(shown.contains("MODE   --> EASY"));
}

#[test]
fn unwritable_leaderboard_does_not_crash() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes every write fail.
    let path = dir.path().join("scores.txt");
    std::fs::create_dir(&path).unwrap();
    let mut app = App::new(GameConfig::new(Mode::Normal, 1), ScoreBoard::new(&path));
    let script = format!("start\ncarol\nnormal\n{}", repeated("3", 5000));
    let mut input = Cursor::new(script);
    let mut out = Vec::new();

    app.run(&mut input, &mut out, &mut seeded_rng()).unwrap();
    assert!(text(&out).contains("Could not save your score"));
}
