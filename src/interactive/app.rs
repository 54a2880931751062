//! TUI application state and logic

use crate::constraints::apply_line;
use crate::filter::FilterEngine;
use crate::index::Dictionary;
use crate::scoring::{FrequencyTable, RankStrategy, Ranking, Scorer};
use crate::session::Sessions;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'d> {
    dictionary: &'d Dictionary,
    frequencies: &'d FrequencyTable,
    scorer: Scorer,
    pub sessions: Sessions,
    pub strategy: RankStrategy,
    /// Ranking of the active tab, rebuilt after every change
    pub ranking: Ranking<'d>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// First ranking row shown
    pub offset: usize,
    pub page_size: usize,
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

impl<'d> App<'d> {
    #[must_use]
    pub fn new(
        dictionary: &'d Dictionary,
        frequencies: &'d FrequencyTable,
        scorer: Scorer,
        size: usize,
        strategy: RankStrategy,
        page_size: usize,
    ) -> Self {
        let mut app = Self {
            dictionary,
            frequencies,
            scorer,
            sessions: Sessions::new(size),
            strategy,
            ranking: Ranking::default(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a hint such as 'c a 1' or 'f crane G-Y--' and press Enter"
                    .to_string(),
                style: MessageStyle::Info,
            }],
            offset: 0,
            page_size: page_size.max(1),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Re-run the active tab's query
    pub fn refresh(&mut self) {
        let constraints = &self.sessions.active().constraints;
        let words = FilterEngine::new(self.dictionary).apply(constraints);
        self.ranking = self.scorer.rank(&words, self.frequencies, self.strategy);
        debug!(candidates = self.ranking.len(), "ranking refreshed");
        self.clamp_offset();
    }

    /// Apply the input buffer as a hint line
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let line = input.trim();
        if line.is_empty() {
            return;
        }
        if matches!(line, "quit" | "q" | "exit") {
            self.should_quit = true;
            return;
        }

        match apply_line(line, &mut self.sessions.active_mut().constraints) {
            Ok(_) => {
                self.offset = 0;
                self.refresh();
                self.add_message(
                    &format!("{}: {} candidates", line, self.ranking.len()),
                    MessageStyle::Success,
                );
            }
            Err(e) => {
                self.add_message(&format!("{line}: {e}"), MessageStyle::Error);
                // keep the text so it can be corrected
                self.input_buffer = input;
            }
        }
    }

    pub fn cycle_strategy(&mut self) {
        self.strategy = self.strategy.next();
        self.offset = 0;
        self.refresh();
        self.add_message(
            &format!("Sorting by {}", self.strategy.name()),
            MessageStyle::Info,
        );
    }

    pub fn new_tab(&mut self) {
        let size = self.sessions.active().constraints.size();
        self.sessions.open(size);
        self.switched_tab();
    }

    pub fn duplicate_tab(&mut self) {
        self.sessions.duplicate_active();
        self.switched_tab();
    }

    pub fn close_tab(&mut self) {
        if self.sessions.close_active() {
            self.switched_tab();
        } else {
            self.add_message("Cannot close the last tab", MessageStyle::Error);
        }
    }

    pub fn next_tab(&mut self) {
        self.sessions.focus_next();
        self.switched_tab();
    }

    pub fn previous_tab(&mut self) {
        self.sessions.focus_previous();
        self.switched_tab();
    }

    pub fn select_tab(&mut self, index: usize) {
        if index < self.sessions.len() {
            self.sessions.select(index);
            self.switched_tab();
        }
    }

    pub fn page_down(&mut self) {
        self.offset = self.offset.saturating_add(self.page_size);
        self.clamp_offset();
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_size);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => self.should_quit = true,
            KeyCode::Char('t') if ctrl => self.new_tab(),
            KeyCode::Char('d') if ctrl => self.duplicate_tab(),
            KeyCode::Char('w') if ctrl => self.close_tab(),
            KeyCode::Char('s') if ctrl => self.cycle_strategy(),
            KeyCode::Char(c @ '1'..='9') if alt => {
                self.select_tab(c as usize - '1' as usize);
            }
            KeyCode::Char(c) if !ctrl && !alt => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Esc => self.input_buffer.clear(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.previous_tab(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            _ => {}
        }
    }

    fn switched_tab(&mut self) {
        self.offset = 0;
        self.refresh();
    }

    fn clamp_offset(&mut self) {
        let last_page = self.ranking.len().saturating_sub(1) / self.page_size * self.page_size;
        self.offset = self.offset.min(last_page);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "apply", "angle", "ample", "crane", "slate", "at"])
    }

    fn app<'d>(dictionary: &'d Dictionary, table: &'d FrequencyTable) -> App<'d> {
        App::new(dictionary, table, Scorer::new(), 5, RankStrategy::Alphabetical, 2)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_line(app: &mut App<'_>, line: &str) {
        for c in line.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn starts_with_whole_bucket() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let app = app(&dictionary, &table);
        assert_eq!(app.ranking.len(), 6);
    }

    #[test]
    fn typed_hint_narrows_ranking() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        type_line(&mut app, "c a 1; i p 2; x n");
        assert_eq!(app.ranking.len(), 1);
        assert_eq!(app.ranking.entries[0].word, "ample");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Success));
    }

    #[test]
    fn bad_hint_keeps_input() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        type_line(&mut app, "c a 9");
        assert_eq!(app.input_buffer, "c a 9");
        assert_eq!(app.ranking.len(), 6);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn tabs_keep_separate_rankings() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        app.handle_key(ctrl('t'));
        type_line(&mut app, "c c 1");
        assert_eq!(app.ranking.len(), 1);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.sessions.active_index(), 0);
        assert_eq!(app.ranking.len(), 6);

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.ranking.entries[0].word, "crane");
    }

    #[test]
    fn duplicate_and_close() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        type_line(&mut app, "x e");
        app.handle_key(ctrl('d'));
        assert_eq!(app.sessions.len(), 2);
        assert_eq!(app.ranking.len(), 1);
        assert_eq!(app.ranking.entries[0].word, "apply");

        app.handle_key(ctrl('w'));
        app.handle_key(ctrl('w'));
        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn paging_is_clamped() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.offset, 2);
        app.handle_key(key(KeyCode::PageDown));
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.offset, 4);
        app.handle_key(key(KeyCode::PageUp));
        assert_eq!(app.offset, 2);
    }

    #[test]
    fn sort_cycles() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        app.handle_key(ctrl('s'));
        assert_eq!(app.strategy, RankStrategy::Score);
    }

    #[test]
    fn alt_digit_selects_tab() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);

        app.new_tab();
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert_eq!(app.sessions.active_index(), 0);
        app.handle_key(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::ALT));
        assert_eq!(app.sessions.active_index(), 0);
    }

    #[test]
    fn quit_keys() {
        let dictionary = dictionary();
        let table = FrequencyTable::new();
        let mut app = app(&dictionary, &table);
        type_line(&mut app, "quit");
        assert!(app.should_quit);

        let mut app = App::new(&dictionary, &table, Scorer::new(), 5, RankStrategy::Score, 5);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }
}
