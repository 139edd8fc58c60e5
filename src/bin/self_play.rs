/// MCTS vs Random on tic-tac-toe
///
/// Plays a series of games between the MCTS agent and the uniform random
/// baseline, alternating who moves first, and reports the tally.
///
/// Useful as a smoke test of the engine and for eyeballing how the time
/// budget trades against playing strength.
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use uct_engine::arena::{play_game, Seat};
use uct_engine::game::oracle::Outcome;
use uct_engine::game::tictactoe::{Mark, TicTacToe};
use uct_engine::logging::setup_logging;
use uct_engine::{MctsAgent, MctsConfig, RandomAgent};

#[derive(Parser, Debug)]
#[command(
    name = "self-play",
    about = "Pit the MCTS agent against a random player on tic-tac-toe"
)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// Seconds of search per MCTS decision (overrides the config file)
    #[arg(short = 't', long)]
    sim_time: Option<f64>,

    /// UCT exploration constant (overrides the config file)
    #[arg(short = 'c', long)]
    exploration: Option<f64>,

    /// RNG seed for reproducible results
    #[arg(short = 'r', long)]
    seed: Option<u64>,

    /// JSON file with MCTS settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _logger = setup_logging("info", args.log_dir.as_deref())?;

    let mut config = match &args.config {
        Some(path) => MctsConfig::from_json_file(path)?,
        None => MctsConfig::default(),
    };
    if let Some(sim_time) = args.sim_time {
        config.sim_time_secs = sim_time;
    }
    if let Some(exploration) = args.exploration {
        config.exploration_constant = exploration;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    log::info!("🎲 MCTS vs Random, {} games", args.games);
    log::info!("   Config: {}", config.to_config_string());

    let (mut wins, mut losses, mut draws) = (0, 0, 0);
    for game in 0..args.games {
        let mcts_mark = if game % 2 == 0 { Mark::X } else { Mark::O };
        let game_config = MctsConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(game as u64)),
            ..config.clone()
        };
        let mut mcts = MctsAgent::new(TicTacToe, mcts_mark, game_config)?;
        let mut random = RandomAgent::new(
            TicTacToe,
            config.seed.map(|seed| seed.wrapping_mul(31).wrapping_add(game as u64)),
        );

        let record = play_game(
            &TicTacToe,
            TicTacToe::initial_state(),
            [
                Seat { player: mcts_mark, agent: &mut mcts },
                Seat { player: mcts_mark.other(), agent: &mut random },
            ],
        )?;

        match record.outcome {
            Outcome::Won(mark) if mark == mcts_mark => wins += 1,
            Outcome::Won(_) => losses += 1,
            _ => draws += 1,
        }
        log::info!(
            "Game {}: MCTS as {:?} -> {:?} in {} moves",
            game + 1,
            mcts_mark,
            record.outcome,
            record.actions.len()
        );
    }

    log::info!("📊 MCTS wins: {}, losses: {}, draws: {}", wins, losses, draws);
    Ok(())
}
