use std::path::PathBuf;

use rand::Rng as _;
use serde::Serialize;
use tictactoe_engine::{AiSeed, GameState, Outcome, RandomAi};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of games to play
    #[clap(long, default_value_t = 1000)]
    games: usize,
    /// Seed for both random players (32 hex characters); random when omitted
    #[clap(long)]
    seed: Option<AiSeed>,
    /// Path to write the JSON summary to (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
    /// Log level used when `RUST_LOG` is not set
    #[clap(long, default_value = "info")]
    log_level: String,
}

/// Tally of a batch of random-vs-random games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SimulationSummary {
    seed: AiSeed,
    games: usize,
    player_wins: usize,
    ai_wins: usize,
    draws: usize,
    mean_moves: f64,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        games,
        seed,
        output,
        log_level,
    } = arg;

    util::init_stderr_tracing(log_level)?;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(%seed, games, "simulating");
    let summary = simulate(*games, seed);
    tracing::info!(
        player_wins = summary.player_wins,
        ai_wins = summary.ai_wins,
        draws = summary.draws,
        "simulation finished"
    );

    Output::save_json(&summary, output.clone())?;
    Ok(())
}

/// Plays `games` games in which both sides pick uniformly random cells.
///
/// Both sides draw from a single generator seeded with `seed`, so the same
/// seed always yields the same summary.
pub(crate) fn simulate(games: usize, seed: AiSeed) -> SimulationSummary {
    let mut ai = RandomAi::with_seed(seed);
    let mut state = GameState::new();
    let mut summary = SimulationSummary {
        seed,
        games,
        player_wins: 0,
        ai_wins: 0,
        draws: 0,
        mean_moves: 0.0,
    };
    let mut total_moves = 0;

    for _ in 0..games {
        state.reset();
        let outcome = loop {
            if let Some(outcome) = state.outcome() {
                break outcome;
            }
            let Ok(index) = ai.choose_move(&state) else {
                tracing::error!(board = %state.board(), "no legal move in an undecided game");
                break Outcome::Draw;
            };
            if let Err(e) = state.apply_move(index, state.current_turn()) {
                tracing::error!(error = %e, "random move rejected");
                break Outcome::Draw;
            }
        };
        total_moves += state.move_count();
        match outcome {
            Outcome::PlayerWins => summary.player_wins += 1,
            Outcome::AiWins => summary.ai_wins += 1,
            Outcome::Draw => summary.draws += 1,
        }
    }

    if games > 0 {
        #[expect(clippy::cast_precision_loss)]
        let mean = total_moves as f64 / games as f64;
        summary.mean_moves = mean;
    }
    summary
}
