mod config;

use anyhow::{Context, Result};
use pawnstorm_core::GameState;
use pawnstorm_engine::Searcher;
use tracing::{info, warn};

use config::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_args(std::env::args().skip(1))?;
    info!(
        depth = config.depth,
        max_plies = config.max_plies,
        seed = ?config.seed,
        "pawnstorm starting"
    );

    let mut searcher = match config.seed {
        Some(seed) => Searcher::with_seed(seed),
        None => Searcher::new(),
    };
    let mut state = GameState::new();

    while state.history().len() < config.max_plies {
        let Some(mv) = searcher.choose_move(&state, config.depth) else {
            break;
        };
        let record = state
            .apply_move(mv.from(), mv.to())
            .with_context(|| format!("searcher produced {mv}"))?;
        info!(
            ply = state.history().len(),
            mv = %record.chess_move(),
            side = %record.piece.color(),
            "played"
        );
    }

    println!("{}", state.board().pretty());
    match state.result() {
        Some(result) => info!(%result, plies = state.history().len(), "game finished"),
        None => warn!(plies = state.history().len(), "ply limit reached, game unfinished"),
    }

    Ok(())
}
