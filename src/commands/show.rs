//! Print one generated terminal with its clusters

use crate::config::GameConfig;
use crate::game::GameSession;
use crate::output::{print_clusters, print_terminal};
use anyhow::Result;
use colored::Colorize;

/// Build a session and print its grid and clusters
///
/// # Errors
///
/// Returns an error if the configuration cannot build a session.
pub fn run_show(config: &GameConfig, reveal_password: bool) -> Result<()> {
    let session = GameSession::from_config(config)?;

    print_terminal(&session, true);
    print_clusters(&session);

    if reveal_password {
        println!(
            "\n🔑 Password: {}",
            session.password().text().bright_yellow().bold()
        );
    }
    Ok(())
}
