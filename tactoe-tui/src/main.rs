use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use app::App;
use clap::Parser;
use tactoe::GameHistory;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod app;
pub mod board;
pub mod help;
pub mod moves;
pub mod status;

#[derive(Debug, Parser)]
#[command(name = "tactoe", about = "Tic-tac-toe with a rewindable move history")]
struct Args {
    /// Write logs to this file. `RUST_LOG` selects the level (default: info).
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Cell indices (0-8) to play before the board is shown, e.g. `4,0,8`.
    #[arg(long, value_delimiter = ',')]
    moves: Vec<usize>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    // The terminal belongs to the UI, so logs only ever go to the file.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut game = GameHistory::new();
    for index in args.moves {
        if let Err(error) = game.play_index(index) {
            warn!(index, %error, "skipping start-up move");
        }
    }
    info!(moves = game.current_move(), "starting session");

    let terminal = ratatui::init();
    let result = App::with_game(game).run(terminal);
    ratatui::restore();
    result
}
