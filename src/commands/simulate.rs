//! Simulate many games with the auto-player
//!
//! Sessions are independent, so they run in parallel; each one is seeded from the
//! base seed plus its index, which keeps a whole run reproducible.

use crate::config::GameConfig;
use crate::game::GameSession;
use crate::output::formatters::{create_progress_bar, percentage};
use crate::solver::{PlayOptions, PlayReport, Solver, StrategyType, play_session};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: usize,
    pub strategy: StrategyType,
    pub use_bonuses: bool,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            strategy: StrategyType::default(),
            use_bonuses: true,
            show_progress: true,
        }
    }
}

/// Statistics over every simulated game
#[derive(Debug, Clone)]
pub struct SimulationStatistics {
    pub strategy: StrategyType,
    pub base_seed: u64,
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    /// Guesses needed per won game
    pub guess_distribution: FxHashMap<usize, usize>,
    pub average_guesses: f64,
    pub resets: usize,
    pub duds_removed: usize,
    pub total_time: Duration,
    /// Seeds of lost games, for replaying with `--seed`
    pub lost_seeds: Vec<u64>,
}

impl SimulationStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.won, self.total_games)
    }
}

/// Auto-play `sim.games` sessions built from `game`
///
/// # Errors
///
/// Returns an error if the configuration cannot build a session.
pub fn run_simulation(game: &GameConfig, sim: &SimulationConfig) -> Result<SimulationStatistics> {
    let base_seed = game.seed.unwrap_or_else(|| rand::rng().random());
    let solver = Solver::new(sim.strategy);
    let options = PlayOptions {
        use_bonuses: sim.use_bonuses,
    };

    let pb = if sim.show_progress {
        let pb = ProgressBar::new(sim.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message(sim.strategy.name());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let reports = (0..sim.games as u64)
        .into_par_iter()
        .map(|index| {
            let seed = base_seed.wrapping_add(index);
            let mut session = GameSession::seeded(game, seed)?;
            let mut rng = ChaCha8Rng::seed_from_u64(seed.rotate_left(32));
            let report = play_session(&mut session, &solver, options, &mut rng);
            pb.inc(1);
            report.map(|report| (seed, report))
        })
        .collect::<Result<Vec<(u64, PlayReport)>, _>>()?;
    pb.finish_with_message("Complete!");

    let stats = summarize(sim.strategy, base_seed, &reports, start.elapsed());
    log::info!(
        "Simulated {} games with {}: {:.1}% won",
        stats.total_games,
        stats.strategy,
        stats.win_rate()
    );
    Ok(stats)
}

fn summarize(
    strategy: StrategyType,
    base_seed: u64,
    reports: &[(u64, PlayReport)],
    total_time: Duration,
) -> SimulationStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut lost_seeds = Vec::new();
    let mut total_guesses = 0;

    for (seed, report) in reports {
        if report.won() {
            *guess_distribution.entry(report.guesses.len()).or_insert(0) += 1;
            total_guesses += report.guesses.len();
        } else {
            lost_seeds.push(*seed);
        }
    }

    let won = reports.len() - lost_seeds.len();
    let average_guesses = if won > 0 {
        total_guesses as f64 / won as f64
    } else {
        0.0
    };

    SimulationStatistics {
        strategy,
        base_seed,
        total_games: reports.len(),
        won,
        lost: lost_seeds.len(),
        guess_distribution,
        average_guesses,
        resets: reports.iter().map(|(_, r)| r.resets).sum(),
        duds_removed: reports.iter().map(|(_, r)| r.duds_removed).sum(),
        total_time,
        lost_seeds,
    }
}

/// Print simulation statistics with beautiful formatting
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Strategy:            {}", stats.strategy);
    println!("  Base seed:           {}", stats.base_seed);
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Terminals unlocked:  {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.lost > 0 {
        println!(
            "  Terminals locked:    {} {}",
            stats.lost,
            format!("({:.1}%)", percentage(stats.lost, stats.total_games)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    let mut guesses: Vec<usize> = stats.guess_distribution.keys().copied().collect();
    guesses.sort_unstable();
    for count_of_guesses in guesses {
        let count = stats.guess_distribution[&count_of_guesses];
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {count_of_guesses:2} guesses: {} {count:5} ({:5.1}%)",
            bar.green(),
            percentage(count, stats.won)
        );
    }

    println!("\n🎁 {}", "Bonuses".bright_cyan().bold());
    println!("  Attempts reset:      {}", stats.resets);
    println!("  Duds removed:        {}", stats.duds_removed);

    if !stats.lost_seeds.is_empty() {
        println!("\n🔒 {}", "Locked Terminals".yellow().bold());
        for seed in stats.lost_seeds.iter().take(5) {
            println!("  --seed {}", seed.to_string().yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(games: usize, strategy: StrategyType) -> SimulationConfig {
        SimulationConfig {
            games,
            strategy,
            use_bonuses: true,
            show_progress: false,
        }
    }

    #[test]
    fn simulation_counts_every_game() {
        let game = GameConfig::default().with_seed(11);
        let stats = run_simulation(&game, &quiet(12, StrategyType::default())).unwrap();

        assert_eq!(stats.total_games, 12);
        assert_eq!(stats.won + stats.lost, 12);
        assert_eq!(stats.lost_seeds.len(), stats.lost);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), stats.won);
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let game = GameConfig::default().with_seed(3);
        let sim = quiet(8, StrategyType::from_name("random"));

        let a = run_simulation(&game, &sim).unwrap();
        let b = run_simulation(&game, &sim).unwrap();
        assert_eq!(a.won, b.won);
        assert_eq!(a.lost_seeds, b.lost_seeds);
        assert_eq!(a.resets, b.resets);
    }

    #[test]
    fn minimax_wins_most_beginner_games() {
        let game = GameConfig::default()
            .with_difficulty(crate::wordlists::Difficulty::Beginner)
            .with_seed(100);
        let stats = run_simulation(&game, &quiet(40, StrategyType::default())).unwrap();
        assert!(stats.win_rate() > 50.0, "win rate {:.1}", stats.win_rate());
    }

    #[test]
    fn summarize_empty_run() {
        let stats = summarize(StrategyType::default(), 0, &[], Duration::ZERO);
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
