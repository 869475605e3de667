//! TUI application state and logic

use crate::core::{Board, Cell, WordPath};
use crate::dictionary::Dictionary;
use crate::generator::generate;
use crate::solver::Solver;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input line accepts
const MAX_INPUT_LEN: usize = 16;

/// Application state
pub struct App<'a, D: Dictionary + ?Sized> {
    pub solver: Solver<'a, D>,
    pub board: Board,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Words found on the current board, in the order they were entered
    pub found: Vec<WordPath>,
    /// Path of the last word found, drawn over the board
    pub highlight: Vec<Cell>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary + ?Sized> App<'a, D> {
    #[must_use]
    pub fn new(solver: Solver<'a, D>, board: Board) -> Self {
        Self {
            solver,
            board,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a word and press Enter to find it on the board.".to_string(),
                style: MessageStyle::Info,
            }],
            found: Vec::new(),
            highlight: Vec::new(),
            should_quit: false,
        }
    }

    /// Look for the typed word and highlight its path
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let word = input.trim().to_ascii_uppercase();
        if word.is_empty() {
            return;
        }

        match self.solver.has_word(&self.board, &word) {
            Ok(Some(found)) => {
                self.highlight = found.path().to_vec();
                if self.found.iter().any(|w| w.word() == found.word()) {
                    self.add_message(&format!("{word} already found"), MessageStyle::Info);
                } else {
                    self.add_message(&format!("{found}"), MessageStyle::Success);
                    self.found.push(found);
                }
            }
            Ok(None) => {
                self.highlight.clear();
                self.add_message(&format!("{word} is not on this board"), MessageStyle::Error);
            }
            Err(e) => {
                self.highlight.clear();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Deal a fresh board of the same size
    pub fn new_board(&mut self) {
        match generate(self.board.size()) {
            Ok(board) => self.replace_board(board),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Swap in `board`, forgetting everything found on the old one
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.found.clear();
        self.highlight.clear();
        self.input_buffer.clear();
        self.add_message("New board dealt!", MessageStyle::Info);
    }

    /// Append a typed character, ignoring anything that is not a letter
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < MAX_INPUT_LEN {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_board(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TrieDictionary;

    fn dictionary() -> TrieDictionary {
        TrieDictionary::from_words(["CAT", "COG", "DEAR"])
    }

    fn board() -> Board {
        Board::from_literal(4, "CATSOXXXGXXXDEAR").unwrap()
    }

    fn type_word<D: Dictionary + ?Sized>(app: &mut App<'_, D>, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit();
    }

    #[test]
    fn found_word_is_highlighted() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());

        type_word(&mut app, "cat");

        assert_eq!(app.found.len(), 1);
        assert_eq!(
            app.highlight,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn missing_word_clears_highlight() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());

        type_word(&mut app, "cog");
        type_word(&mut app, "dog");

        assert_eq!(app.found.len(), 1);
        assert!(app.highlight.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn repeated_word_is_not_recorded_twice() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());

        type_word(&mut app, "DEAR");
        type_word(&mut app, "dear");

        assert_eq!(app.found.len(), 1);
        assert_eq!(app.highlight.len(), 4);
    }

    #[test]
    fn input_accepts_only_letters() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());

        for c in "c4a t!".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "CAT");
    }

    #[test]
    fn empty_submit_is_ignored() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());
        let before = app.messages.len();

        app.submit();

        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn new_board_resets_progress() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());
        type_word(&mut app, "cat");

        app.new_board();

        assert_eq!(app.board.size(), 4);
        assert!(app.found.is_empty());
        assert!(app.highlight.is_empty());
    }

    #[test]
    fn message_log_is_bounded() {
        let dict = dictionary();
        let mut app = App::new(Solver::new(&dict), board());
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
