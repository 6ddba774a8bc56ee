//! Self-play settings from positional command-line arguments.

use anyhow::{Context, Result, bail};
use pawnstorm_engine::DEFAULT_DEPTH;

/// Settings for one self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Search depth in plies for both sides.
    pub depth: u8,
    /// Stop after this many plies even if the game is still going.
    pub max_plies: usize,
    /// Seed for the searchers; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            depth: DEFAULT_DEPTH,
            max_plies: 200,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Parse `[depth] [max_plies] [seed]`; missing arguments keep their defaults.
    pub fn from_args<I, S>(args: I) -> Result<AppConfig>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = AppConfig::default();
        let mut args = args.into_iter();

        if let Some(arg) = args.next() {
            let arg = arg.as_ref();
            config.depth = arg
                .parse()
                .with_context(|| format!("invalid depth '{arg}'"))?;
            if config.depth == 0 {
                bail!("depth must be at least 1");
            }
        }
        if let Some(arg) = args.next() {
            let arg = arg.as_ref();
            config.max_plies = arg
                .parse()
                .with_context(|| format!("invalid ply limit '{arg}'"))?;
        }
        if let Some(arg) = args.next() {
            let arg = arg.as_ref();
            config.seed = Some(
                arg.parse()
                    .with_context(|| format!("invalid seed '{arg}'"))?,
            );
        }
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{}'", extra.as_ref());
        }

        Ok(config)
    }
}
