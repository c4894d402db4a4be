use std::{path::PathBuf, time::Duration};

use tictactoe_engine::{AiSeed, RandomAi};

use crate::{command::play::app::PlayApp, tui::Tui, util};

mod app;
mod screen;

/// Delay before the AI answers a Player move.
const DEFAULT_AI_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds the AI "thinks" before playing
    #[clap(long, default_value_t = DEFAULT_AI_DELAY_MS)]
    ai_delay_ms: u64,
    /// Seed for the AI (32 hex characters); random when omitted
    #[clap(long)]
    seed: Option<AiSeed>,
    /// Write logs to this file (the terminal is owned by the game)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Log level used when `RUST_LOG` is not set
    #[clap(long, default_value = "info")]
    log_level: String,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            seed: None,
            log_file: None,
            log_level: "info".to_owned(),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        ai_delay_ms,
        seed,
        log_file,
        log_level,
    } = arg;

    if let Some(log_file) = log_file {
        util::init_file_tracing(log_file, log_level)?;
    }

    let ai = seed.map_or_else(RandomAi::new, RandomAi::with_seed);
    tracing::info!(seed = %ai.seed(), ai_delay_ms, "starting game");

    let mut app = PlayApp::new(ai, Duration::from_millis(*ai_delay_ms));
    Tui::new().run(&mut app)?;

    Ok(())
}
