//! Wordhack - CLI
//!
//! Password-hacking puzzle with TUI and line modes, plus an auto-player for
//! simulating many games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordhack::{
    commands::{
        SimulationConfig, print_simulation_statistics, run_show, run_simple, run_simulation,
    },
    config::{DEFAULT_COLS, DEFAULT_PANELS, DEFAULT_ROWS, GameConfig, STARTING_ATTEMPTS},
    solver::StrategyType,
    wordlists::{Difficulty, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordhack",
    about = "Hack a terminal by guessing its password from a grid of jumbled words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list tier
    #[arg(short, long, global = true, value_enum, default_value_t = Difficulty::Master)]
    difficulty: Difficulty,

    /// Total rows across all panels
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Columns per row
    #[arg(long, global = true, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Number of side-by-side panels
    #[arg(long, global = true, default_value_t = DEFAULT_PANELS)]
    panels: usize,

    /// Starting attempts
    #[arg(short, long, global = true, default_value_t = STARTING_ATTEMPTS)]
    attempts: usize,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Custom word list file (one word per line, all the same length)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without the TUI)
    Simple,

    /// Print one generated grid with its words and bonuses
    Show {
        /// Also print the password
        #[arg(short, long)]
        reveal: bool,
    },

    /// Auto-play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Strategy: minimax (default) or random
        #[arg(short, long, default_value = "minimax")]
        strategy: String,

        /// Never click symbol clusters
        #[arg(long)]
        no_bonuses: bool,
    },
}

/// Build the game configuration from the global flags
fn game_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::default()
        .with_difficulty(cli.difficulty)
        .with_layout(cli.rows, cli.cols, cli.panels);
    config.attempts = cli.attempts;

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = &cli.wordlist {
        config = config.with_words(load_from_file(path)?);
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = game_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config),
        Commands::Show { reveal } => run_show(&config, reveal),
        Commands::Simulate {
            games,
            strategy,
            no_bonuses,
        } => run_simulate_command(&config, games, &strategy, !no_bonuses),
    }
}

fn run_simulate_command(
    config: &GameConfig,
    games: usize,
    strategy_name: &str,
    use_bonuses: bool,
) -> Result<()> {
    let sim = SimulationConfig {
        games,
        strategy: StrategyType::from_name(strategy_name),
        use_bonuses,
        show_progress: true,
    };

    println!(
        "Simulating {games} {} games with the {} strategy...\n",
        config.difficulty, sim.strategy
    );
    let stats = run_simulation(config, &sim)?;
    print_simulation_statistics(&stats);
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordhack::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}
