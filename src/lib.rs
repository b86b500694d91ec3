//! Wordhack
//!
//! A terminal password-hacking puzzle. Candidate words are jumbled into a grid of
//! symbols; each wrong guess reports how many letters sit in the right place, and
//! bracketed symbol pairs hidden in the grid either remove a dud word or restore
//! the attempt counter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhack::config::GameConfig;
//! use wordhack::game::{GameSession, SessionState};
//!
//! let mut session = GameSession::seeded(&GameConfig::default(), 42).unwrap();
//! let password = session.password().text().to_string();
//!
//! let outcome = session.submit_guess(&password).unwrap();
//! assert_eq!(outcome.state, SessionState::Won);
//! ```

// Core domain types
pub mod core;

// Errors shared across the library
pub mod error;

// Game setup
pub mod config;

// Word lists
pub mod wordlists;

// Character grid and clusters
pub mod grid;

// Game rules and sessions
pub mod game;

// Auto-player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
