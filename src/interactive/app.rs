//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{GameSession, GuessOutcome, SessionState};
use crate::grid::Position;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Lines kept in the terminal log
const LOG_CAPACITY: usize = 12;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub session: GameSession,
    pub cursor: Position,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    games: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Hacking,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Echo,
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    /// Start the first session described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot build a session.
    pub fn new(config: GameConfig) -> Result<Self> {
        let session = GameSession::from_config(&config)?;
        let mut app = Self {
            config,
            session,
            cursor: Position::new(0, 0),
            input_mode: InputMode::Hacking,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            games: 0,
        };
        app.session.hover(app.cursor)?;
        app.add_message(
            &format!("Password length: {}", app.session.word_length()),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Move the cursor to the previous cell in reading order
    pub fn move_left(&mut self) {
        if let Some(position) = self.session.grid().previous(self.cursor) {
            self.move_to(position);
        }
    }

    /// Move the cursor to the next cell in reading order
    pub fn move_right(&mut self) {
        if let Some(position) = self.session.grid().next(self.cursor) {
            self.move_to(position);
        }
    }

    pub fn move_up(&mut self) {
        if let Some(row) = self.cursor.row.checked_sub(1) {
            self.move_to(Position::new(row, self.cursor.col));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.session.grid().rows() {
            self.move_to(Position::new(self.cursor.row + 1, self.cursor.col));
        }
    }

    /// Jump to the same line of the next panel
    pub fn switch_panel(&mut self) {
        let rows = self.session.grid().rows();
        let per_panel = self.session.grid().rows_per_panel();
        if rows > per_panel {
            self.move_to(Position::new(
                (self.cursor.row + per_panel) % rows,
                self.cursor.col,
            ));
        }
    }

    fn move_to(&mut self, position: Position) {
        match self.session.hover(position) {
            Ok(()) => self.cursor = position,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Click whatever is under the cursor
    pub fn click(&mut self) {
        let text = self
            .session
            .grid()
            .selection_at(self.cursor)
            .map(|s| s.text)
            .unwrap_or_default();

        match self.session.select_at(self.cursor) {
            Ok(outcome) => self.record_outcome(&text, &outcome),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_outcome(&mut self, text: &str, outcome: &GuessOutcome) {
        self.add_message(&format!("> {text}"), MessageStyle::Echo);
        let style = match outcome.state {
            SessionState::Won => MessageStyle::Success,
            SessionState::Lost => MessageStyle::Error,
            SessionState::Active => MessageStyle::Info,
        };
        for line in outcome.feedback.messages() {
            self.add_message(&line, style);
        }

        if outcome.state.is_terminal() {
            self.stats.total_games += 1;
            if outcome.state == SessionState::Won {
                self.stats.games_won += 1;
            }
            self.input_mode = InputMode::GameOver;
            self.session.clear_hover();
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        self.games += 1;
        match GameSession::from_config(&self.config.nth_game(self.games)) {
            Ok(session) => {
                self.session = session;
                self.cursor = Position::new(0, 0);
                self.messages.clear();
                self.input_mode = InputMode::Hacking;
                if let Err(err) = self.session.hover(self.cursor) {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
                self.add_message("New terminal connected.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > LOG_CAPACITY {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            _ if self.input_mode == InputMode::GameOver => {}
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Tab => self.switch_panel(),
            KeyCode::Enter | KeyCode::Char(' ') => self.click(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
