//! TUI rendering with ratatui
//!
//! A green-on-black terminal: header, the two memory panels, and the log.

use super::app::{App, InputMode, MessageStyle};
use crate::game::SessionState;
use crate::grid::Cell;
use crate::output::formatters::{PROMPT, TITLE, attempts_line, percentage};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const PANEL_GAP: &str = "    ";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header
            Constraint::Min(10),   // Terminal and log
            Constraint::Length(3), // Banner or help
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_panels(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    match app.input_mode {
        InputMode::GameOver => render_banner(f, app, chunks[2]),
        InputMode::Hacking => render_help(f, chunks[2]),
    }
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(PROMPT),
        Line::from(""),
        Line::from(attempts_line(app.session.attempts_remaining())),
    ];

    let header = Paragraph::new(content)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_panels(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();
    let addresses = app.session.addresses();
    let per_panel = grid.rows_per_panel();

    let lines: Vec<Line> = (0..per_panel)
        .map(|line| {
            let mut spans = Vec::new();
            for panel in 0..grid.panels() {
                let row = panel * per_panel + line;
                if panel > 0 {
                    spans.push(Span::raw(PANEL_GAP));
                }
                spans.push(Span::styled(
                    format!("{} ", addresses.label(row).unwrap_or_default()),
                    Style::default().fg(Color::DarkGray),
                ));
                spans.extend(grid.grid().row(row).iter().map(cell_span));
            }
            Line::from(spans)
        })
        .collect();

    let panels = Paragraph::new(lines).block(
        Block::default()
            .title(" Memory ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(panels, area);
}

fn cell_span(cell: &Cell) -> Span<'static> {
    let style = if cell.is_active() {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::Green)
    };
    Span::styled(cell.content().to_string(), style)
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    // Newest entries sit at the bottom, like a scrolling terminal
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.messages.len().saturating_sub(visible);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .skip(skip)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Echo => Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Info => Style::default().fg(Color::Green),
                MessageStyle::Success => Style::default().fg(Color::LightGreen),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Log ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.session.state() {
        SessionState::Won => ("🔓 TERMINAL UNLOCKED".to_string(), Color::Green),
        SessionState::Lost => (
            format!(
                "🔒 TERMINAL LOCKED | Password was {}",
                app.session.password().text()
            ),
            Color::Red,
        ),
        SessionState::Active => (String::new(), Color::Green),
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" n: New Game | q: Quit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(banner, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("←↑↓→: Move | Tab: Other Panel | Enter: Select | n: New Game | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let difficulty = Paragraph::new(format!("Difficulty: {}", app.config.difficulty))
        .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        percentage(app.stats.games_won, app.stats.total_games)
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let address = app
        .session
        .addresses()
        .label(app.cursor.row)
        .unwrap_or_default();
    let cursor = Paragraph::new(format!("Cursor: {address} +{}", app.cursor.col))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(cursor, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_header_and_addresses() {
        let app = App::new(GameConfig::default().with_seed(8)).unwrap();
        let text = screen(&app);

        assert!(text.contains(TITLE));
        assert!(text.contains(PROMPT));
        assert!(text.contains("4 Attempt(s) Left"));
        let first = app.session.addresses().label(0).unwrap();
        assert!(text.contains(&first));
    }

    #[test]
    fn renders_result_banner() {
        let mut app = App::new(GameConfig::default().with_seed(8)).unwrap();
        let password = app.session.password().text().to_string();
        let outcome = app.session.submit_guess(&password).unwrap();
        assert!(outcome.state.is_terminal());
        app.input_mode = InputMode::GameOver;

        assert!(screen(&app).contains("TERMINAL UNLOCKED"));
    }
}
