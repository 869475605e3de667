//! TUI rendering with ratatui
//!
//! Board grid, found words, message log and input line.

use super::app::{App, MessageStyle};
use crate::dictionary::Dictionary;
use crate::output::formatters::path_steps;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOBBLE - Word Explorer")
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

fn render_board<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let size = app.board.size();
    let steps = path_steps(size, &app.highlight);

    let mut lines = vec![Line::from("")];
    for (row, letters) in app.board.rows().enumerate() {
        let mut spans = Vec::with_capacity(size);
        for (col, &letter) in letters.iter().enumerate() {
            let span = match steps[row * size + col] {
                Some(step) => Span::styled(
                    format!(" {}{step:<2}", letter as char),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(
                    format!(" {}  ", letter as char),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board {size}×{size} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_found(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_found<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let items: Vec<ListItem> = app
        .found
        .iter()
        .rev()
        .map(|found| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", found.word()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{} letters", found.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Found ({}) ", app.found.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
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

fn render_input<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Find a word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status<D: Dictionary + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let board = Paragraph::new(app.board.to_literal()).alignment(Alignment::Center);
    f.render_widget(board, chunks[0]);

    let help = Paragraph::new("Enter: Find | Ctrl-N: New Board | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::TrieDictionary;
    use crate::solver::Solver;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_found_words() {
        let dict = TrieDictionary::from_words(["CAT"]);
        let board = Board::from_literal(3, "CATXXXXXX").unwrap();
        let mut app = App::new(Solver::new(&dict), board);
        for c in "cat".chars() {
            app.push_char(c);
        }
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Board 3×3"));
        assert!(text.contains("Found (1)"));
        assert!(text.contains("CATXXXXXX"));
    }
}
