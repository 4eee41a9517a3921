//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_GUESSES, Verdict, WORD_UNITS, layout};
use crate::output::formatters::key_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("ਪੰਜਾਬੀ ਵਰਡਲ  |  {}", app.label))
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

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile_span(text: &str, style: Style) -> [Span<'static>; 2] {
    [Span::styled(format!("  {text}  "), style), Span::raw(" ")]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let empty = Style::default().fg(Color::DarkGray);
    let typing = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for row in 0..MAX_GUESSES {
        let spans: Vec<Span> = if let Some(record) = app.game.guesses().get(row) {
            record
                .word
                .units()
                .iter()
                .zip(record.feedback.verdicts())
                .flat_map(|(unit, verdict)| tile_span(unit, verdict_style(verdict)))
                .collect()
        } else if row == app.game.guesses().len() && app.input_mode == InputMode::Typing {
            let units = app.buffer.units();
            (0..WORD_UNITS)
                .flat_map(|i| match units.get(i) {
                    Some(unit) => tile_span(unit, typing),
                    None => tile_span("·", empty),
                })
                .collect()
        } else {
            (0..WORD_UNITS).flat_map(|_| tile_span("·", empty)).collect()
        };

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(grid) = &app.share {
        lines.extend(grid.lines().map(|line| Line::from(line.to_owned())));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guesses ({} left) ", app.game.remaining()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Keyboard
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();

    let lines: Vec<Line> = layout()
        .into_iter()
        .enumerate()
        .map(|(row, keys)| {
            let spans: Vec<Span> = keys
                .iter()
                .enumerate()
                .flat_map(|(col, &key)| {
                    let mut style = match keyboard.get(key) {
                        Some(verdict) => verdict_style(verdict),
                        None => Style::default().fg(Color::White),
                    };
                    if app.cursor == (row, col) && app.input_mode == InputMode::Typing {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    [Span::styled(format!(" {} ", key_text(key)), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" ਕੀਬੋਰਡ ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | 's' share, 'n' new game, 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Typing => (
            format!(
                " Guess ({}/{WORD_UNITS}) | Enter to submit ",
                app.buffer.unit_count()
            ),
            app.buffer.units().join(" "),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {:?}", app.game.mode())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = vec![
        Line::from(format!(
            "Games: {} | Win Rate: {:.0}%",
            app.stats.total_games,
            app.stats.win_rate()
        )),
        Line::from(Span::styled(
            app.stats.distribution_summary(),
            Style::default().fg(Color::Green),
        )),
    ];
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Game | s: Share",
        InputMode::Typing => "Esc: Quit | Ctrl-N: New Game | Arrows+Space: On-screen keys",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
