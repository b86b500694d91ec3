//! Simple interactive CLI mode
//!
//! Text-based game without the TUI. The player types a word shown in the grid, a
//! bracket pair, or `row:col` to click a single cell.

use crate::config::GameConfig;
use crate::game::{GameSession, GuessOutcome};
use crate::grid::{Cluster, Position};
use crate::output::{print_game_over, print_outcome, print_terminal};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    NewGame,
    Help,
    Cell(Position),
    Text(String),
}

fn parse_input(input: &str) -> Option<Input> {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "" => None,
        "quit" | "q" | "exit" => Some(Input::Quit),
        "new" | "n" => Some(Input::NewGame),
        "help" | "h" | "?" => Some(Input::Help),
        _ => {
            if let Some((row, col)) = trimmed.split_once(':')
                && let (Ok(row), Ok(col)) = (row.trim().parse(), col.trim().parse())
            {
                return Some(Input::Cell(Position::new(row, col)));
            }
            Some(Input::Text(trimmed.to_uppercase()))
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if the configuration cannot build a session.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Password Hacking - Line Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut games = 0;
    let mut session = GameSession::from_config(config)?;

    loop {
        print_terminal(&session, false);

        if session.state().is_terminal() {
            print_game_over(&session);
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    games += 1;
                    session = GameSession::from_config(&config.nth_game(games))?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Goodbye!\n");
                    return Ok(());
                }
            }
        }

        let Some(input) = parse_input(&get_user_input(">")?) else {
            continue;
        };

        match input {
            Input::Quit => {
                println!("\n👋 Goodbye!\n");
                return Ok(());
            }
            Input::NewGame => {
                games += 1;
                session = GameSession::from_config(&config.nth_game(games))?;
                println!("\n🔄 New game started!\n");
            }
            Input::Help => print_help(),
            Input::Cell(position) => {
                let text = session
                    .grid()
                    .selection_at(position)
                    .map(|s| s.text)
                    .unwrap_or_default();
                match session.select_at(position) {
                    Ok(outcome) => print_outcome(&text, &outcome),
                    Err(err) => println!("{}", format!("❌ {err}").red()),
                }
            }
            Input::Text(text) => match select_visible(&mut session, &text) {
                Some(outcome) => print_outcome(&text, &outcome?),
                None => println!("{}", format!("❌ {text} is not on the screen").red()),
            },
        }
    }
}

/// Click the word or bracket pair whose text matches `text`
fn select_visible(
    session: &mut GameSession,
    text: &str,
) -> Option<Result<GuessOutcome, crate::error::GameError>> {
    let grid = session.grid();
    let id = grid
        .letter_clusters()
        .chain(grid.symbol_clusters())
        .find(|c| c.text() == Some(text))
        .map(Cluster::id)?;
    Some(session.select_cluster(id))
}

fn print_help() {
    println!("Type a word from the grid to guess it, or a bracket pair like (#$) to use it.");
    println!("'row:col' clicks a single cell (rows count down the first panel, then the second).");
    println!("Commands: 'new' for a new game, 'help', 'quit'\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt} ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("  "), None);
        assert_eq!(parse_input("Q"), Some(Input::Quit));
        assert_eq!(parse_input("new"), Some(Input::NewGame));
        assert_eq!(parse_input("?"), Some(Input::Help));
    }

    #[test]
    fn parse_cell_coordinates() {
        assert_eq!(
            parse_input("3:14"),
            Some(Input::Cell(Position::new(3, 14)))
        );
        assert_eq!(
            parse_input(" 0 : 2 "),
            Some(Input::Cell(Position::new(0, 2)))
        );
    }

    #[test]
    fn parse_text_is_uppercased() {
        assert_eq!(parse_input("bake"), Some(Input::Text("BAKE".into())));
        assert_eq!(parse_input("(#)"), Some(Input::Text("(#)".into())));
        // Not a coordinate, so it stays text
        assert_eq!(parse_input("a:b"), Some(Input::Text("A:B".into())));
    }

    #[test]
    fn typed_word_must_be_visible() {
        let mut session = GameSession::seeded(&GameConfig::default(), 4).unwrap();
        assert!(select_visible(&mut session, "NOTAWORD").is_none());

        let word = session
            .grid()
            .letter_clusters()
            .next()
            .and_then(Cluster::text)
            .unwrap()
            .to_string();
        assert!(select_visible(&mut session, &word).unwrap().is_ok());
        // Clicked words dissolve
        assert!(select_visible(&mut session, &word).is_none());
    }
}
