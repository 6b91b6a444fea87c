//! Self-play driver for the random bot.
//!
//! Plays complete games between two random policies and prints each result
//! with the final position.

use anyhow::Context;
use bot_random::RandomPolicy;
use clap::Parser;
use serde::Serialize;
use shogi_engine::{Game, GameResult, RuleConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Random shogi bot - plays self-play games with uniformly random moves.
#[derive(Parser)]
#[command(name = "bot-random")]
#[command(about = "Plays self-play shogi games with random legal moves")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value = "1")]
    games: u32,

    /// Seed for reproducible games (game N uses seed + N)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML rules file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON summary per game instead of text
    #[arg(long)]
    json: bool,
}

/// Summary of one finished game.
#[derive(Debug, Serialize)]
struct GameSummary {
    game: u32,
    result: GameResult,
    plies: usize,
    move_count: u32,
    final_sfen: String,
}

fn play_game(config: &RuleConfig, policy: &mut RandomPolicy) -> anyhow::Result<Game> {
    let mut game = Game::with_config(config.clone());
    while !game.is_game_over() {
        if game.play_policy(policy)?.is_none() {
            game.resign()?;
        }
    }
    Ok(game)
}

/// Reads the rules named on the command line. An explicit path must exist.
fn load_rules(path: Option<&Path>) -> anyhow::Result<RuleConfig> {
    match path {
        Some(path) => RuleConfig::from_file(path)
            .with_context(|| format!("loading rules from {}", path.display())),
        None => Ok(RuleConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = load_rules(args.config.as_deref())?;
    tracing::info!("Rules: {:?}", config);

    for n in 0..args.games {
        let mut policy = match args.seed {
            Some(seed) => RandomPolicy::seeded(seed.wrapping_add(n as u64)),
            None => RandomPolicy::new(),
        };
        let game = play_game(&config, &mut policy)?;
        let Some(result) = game.game_result() else {
            anyhow::bail!("game {} stopped before it was over", n + 1);
        };

        let summary = GameSummary {
            game: n + 1,
            result,
            plies: game.history().len(),
            move_count: game.move_count(),
            final_sfen: game.to_sfen(),
        };
        tracing::info!("Game {} finished: {}", summary.game, summary.result);

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "Game {}: {} after {} plies\n  {}",
                summary.game, summary.result, summary.plies, summary.final_sfen
            );
        }
    }

    Ok(())
}
