use std::io::{stdin, stdout, BufWriter};

use rand::rngs::StdRng;
use rand::SeedableRng;

use duel_game::app::App;
use duel_game::cli::parse_args;
use duel_game::entities::Mode;
use duel_game::error::Result;
use duel_game::mode::GameConfig;
use duel_game::scores::ScoreBoard;

fn main() -> Result<()> {
    let args = parse_args();

    // Game text goes to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::new(args.mode.unwrap_or(Mode::Normal), args.lives);
    let board = ScoreBoard::new(&args.scores_file);
    tracing::info!(scores = %args.scores_file.display(), mode = %config.mode(), lives = args.lives, "starting");

    let mut app = App::new(config, board);
    if args.mode.is_some() {
        app = app.with_fixed_mode();
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = stdin();
    let mut input = stdin.lock();
    let mut out = BufWriter::new(stdout());

    app.run(&mut input, &mut out, &mut rng)
}
