//! TUI rendering with ratatui
//!
//! Visualizations for the letter-placement board.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Coord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Next letters / game over banner
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Next letters / banner
    render_banner(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔠 WORDGRID - Letter Placement Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // The grid itself
            Constraint::Length(4), // Bag and dictionary info
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_supply(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(app.grid.rows());

    for row in 0..app.grid.rows() {
        let mut spans = Vec::with_capacity(app.grid.cols());
        for col in 0..app.grid.cols() {
            let cell = app.grid.letter(row, col);
            let symbol = match cell {
                Some(b) => format!("{} ", b as char),
                None => "· ".to_string(),
            };
            let mut style = match cell {
                Some(_) => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray),
            };
            if app.cursor == Coord::new(row, col) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_supply(f: &mut Frame, app: &App, area: Rect) {
    let dictionary_line = if app.dictionary.healthy() {
        Line::from(vec![
            Span::raw("Dictionary: "),
            Span::styled(
                format!("{} words", app.dictionary.len()),
                Style::default().fg(Color::Green),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("Dictionary: "),
            Span::styled(
                "unhealthy, every word counts",
                Style::default().fg(Color::Red),
            ),
        ])
    };

    let content = vec![
        Line::from(format!("Bag: {} tiles left", app.bag.remaining())),
        dictionary_line,
    ];

    let supply = Paragraph::new(content).block(
        Block::default()
            .title(" Supply ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(supply, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Fill gauge
            Constraint::Percentage(50), // Found words
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_fill_gauge(f, app, chunks[0]);
    render_found_words(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_fill_gauge(f: &mut Frame, app: &App, area: Rect) {
    let cells = app.grid.rows() * app.grid.cols();
    let progress_pct = if cells == 0 {
        0
    } else {
        (app.placed * 100 / cells) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Board Fill ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{}/{} cells | {} points",
            app.placed, cells, app.score
        ));

    f.render_widget(gauge, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .found_log
        .iter()
        .rev()
        .map(|(word, points)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{word:<12}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("+{points}"), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let title = format!(" Found Words ({}) ", app.found_log.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::GameOver => {
            let content = format!(
                " 🎉 BOARD FULL! Final score: {} | Press 'n' for new board or 'q' to quit ",
                app.score
            );
            let banner = Paragraph::new(content)
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .style(Style::default().fg(Color::Green)),
                );
            f.render_widget(banner, area);
        }
        InputMode::Placing => {
            let mut spans = vec![Span::raw("Next: ")];
            for (i, &letter) in app.next_letters.iter().enumerate() {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("{} ", letter as char), style));
            }

            let banner = Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .title(" Upcoming Letters ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(Style::default().fg(Color::Yellow)),
                );
            f.render_widget(banner, area);
        }
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Placing => "Mode: Placing",
        InputMode::GameOver => "Mode: Board Full",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let score_text = format!("Score: {}", app.score);
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Placing => "q: Quit | u: Undo | Enter: Place | n: New",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
