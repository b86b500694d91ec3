//! Interactive TUI interface
//!
//! Full-screen terminal built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
