//! Display functions for the line-based front-ends

use super::formatters::{PROMPT, TITLE, attempts_line};
use crate::game::{GameSession, GuessOutcome, SessionState};
use crate::grid::{Cell, CellKind, Cluster};
use colored::{Color, ColoredString, Colorize};
use rand::Rng;

/// Print the terminal header and both panels
///
/// With `reveal` letter clusters are green and bonus brackets yellow, which is what
/// `show` uses to inspect a generated grid.
pub fn print_terminal<R: Rng>(session: &GameSession<R>, reveal: bool) {
    let grid = session.grid();
    let per_panel = grid.rows_per_panel();

    println!("\n{}", TITLE.bright_green().bold());
    println!("{}", PROMPT.green());
    println!("\n{}\n", attempts_line(session.attempts_remaining()).green());

    for line in 0..per_panel {
        let mut out = String::new();
        for panel in 0..grid.panels() {
            let row = panel * per_panel + line;
            if panel > 0 {
                out.push_str("   ");
            }
            let label = session.addresses().label(row).unwrap_or_default();
            out.push_str(&format!("{} ", label.bright_black()));
            for cell in grid.grid().row(row) {
                out.push_str(&paint(cell, reveal).to_string());
            }
        }
        println!("{out}");
    }
    println!();
}

fn paint(cell: &Cell, reveal: bool) -> ColoredString {
    let text = cell.content().to_string();
    if cell.is_active() {
        return text.black().on_green();
    }
    if !reveal || cell.cluster().is_none() {
        return text.green();
    }
    match cell.kind() {
        CellKind::Letter => text.bright_green().bold(),
        CellKind::Symbol(_) => text.yellow(),
    }
}

/// Print the echo and feedback lines of one selection
pub fn print_outcome(text: &str, outcome: &GuessOutcome) {
    println!("{}", format!("> {text}").bright_white());
    for line in outcome.feedback.messages() {
        let line = match outcome.state {
            SessionState::Won => line.bright_green().bold(),
            SessionState::Lost => line.red().bold(),
            SessionState::Active => line.green(),
        };
        println!("{line}");
    }
}

/// Print the clusters found in a grid
pub fn print_clusters<R: Rng>(session: &GameSession<R>) {
    let grid = session.grid();
    print_cluster_list("📜", "Words", grid.letter_clusters(), Color::BrightGreen);
    println!();
    print_cluster_list("🎁", "Bonuses", grid.symbol_clusters(), Color::Yellow);
}

fn print_cluster_list<'a>(
    icon: &str,
    label: &str,
    clusters: impl Iterator<Item = &'a Cluster>,
    color: Color,
) {
    let clusters: Vec<&Cluster> = clusters.collect();
    println!("{icon} {} ({})", label.bright_cyan().bold(), clusters.len());
    for cluster in clusters {
        let (text, position) = cluster_entry(cluster);
        println!("  {} at {}", text.color(color), position.bright_black());
    }
}

/// Text and starting position of a cluster
fn cluster_entry(cluster: &Cluster) -> (&str, String) {
    let text = cluster.text().unwrap_or_default();
    let position = cluster
        .first()
        .map(|p| p.to_string())
        .unwrap_or_default();
    (text, position)
}

/// Print the closing banner of a finished game
pub fn print_game_over<R: Rng>(session: &GameSession<R>) {
    println!("\n{}", "═".repeat(60).cyan());
    match session.state() {
        SessionState::Won => println!(
            "{}",
            "🔓 TERMINAL UNLOCKED".bright_green().bold()
        ),
        SessionState::Lost => println!(
            "{} The password was {}",
            "🔒 TERMINAL LOCKED.".red().bold(),
            session.password().text().bright_yellow().bold()
        ),
        SessionState::Active => {}
    }
    println!("{}", "═".repeat(60).cyan());
}
