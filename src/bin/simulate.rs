use anyhow::{bail, Result};
use clap::Parser;

use tigers_and_goats::ai::{Agent, GreedyTiger, RandomAgent};
use tigers_and_goats::game::{GameState, Mode, Outcome, Side};

/// Play headless games: random goats against a tiger bot.
#[derive(Parser)]
#[command(name = "simulate", about = "Run headless Tigers and Goats games")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Base RNG seed; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Tiger agent: greedy or random
    #[arg(long, default_value = "greedy")]
    tiger: String,

    /// Moves after which a game is counted as unfinished
    #[arg(long, default_value_t = 500)]
    max_plies: usize,
}

#[derive(Debug, Default)]
struct Tally {
    tiger_wins: usize,
    goat_wins: usize,
    unfinished: usize,
    plies: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.tiger.as_str() {
        "greedy" | "random" => {}
        other => bail!("unknown tiger agent '{}' (expected 'greedy' or 'random')", other),
    }

    let mut tally = Tally::default();
    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(game as u64);
        let mut goats = RandomAgent::with_seed(seed);
        let mut tigers: Box<dyn Agent> = match cli.tiger.as_str() {
            "random" => Box::new(RandomAgent::with_seed(seed ^ 0x5eed)),
            _ => Box::new(GreedyTiger::new()),
        };

        let (outcome, plies) = play_game(&mut goats, tigers.as_mut(), cli.max_plies);
        tally.plies += plies;
        match outcome {
            Some(Outcome::TigersWin) => tally.tiger_wins += 1,
            Some(Outcome::GoatsWin) => tally.goat_wins += 1,
            None => tally.unfinished += 1,
        }
        log::debug!("game {} ended after {} plies: {:?}", game, plies, outcome);
    }

    let games = cli.games.max(1) as f64;
    println!("Games:       {}", cli.games);
    println!("Tigers win:  {} ({:.1}%)", tally.tiger_wins, 100.0 * tally.tiger_wins as f64 / games);
    println!("Goats win:   {} ({:.1}%)", tally.goat_wins, 100.0 * tally.goat_wins as f64 / games);
    println!("Unfinished:  {}", tally.unfinished);
    println!("Avg plies:   {:.1}", tally.plies as f64 / games);
    Ok(())
}

/// Play one game to the end or the ply cap. Returns the outcome and the
/// number of moves made.
fn play_game(goats: &mut dyn Agent, tigers: &mut dyn Agent, max_plies: usize) -> (Option<Outcome>, usize) {
    let mut state = GameState::new(Mode::TwoPlayer);
    let mut plies = 0;
    while plies < max_plies && !state.is_terminal() {
        let side = state.turn();
        let chosen = match side {
            Side::Goat => goats.select_move(&state),
            Side::Tiger => tigers.select_move(&state),
        };
        let Some(mv) = chosen else {
            // Goats can run out of moves; the rules have no result for that.
            break;
        };
        if let Err(err) = state.apply_move(mv) {
            log::warn!("{} chose rejected move {:?}: {:?}", side.name(), mv, err);
            break;
        }
        state.check_terminal();
        plies += 1;
    }
    (state.outcome(), plies)
}
