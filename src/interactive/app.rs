//! TUI application state and logic

use crate::core::{Coord, Grid};
use crate::dictionary::Dictionary;
use crate::engine::{ScorePolicy, novel_word_delta, score};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::io;

/// Letters shown ahead of the current one
pub const PREVIEW_LETTERS: usize = 3;

/// Tile counts per letter, Scrabble-weighted so common letters dominate
const LETTER_DISTRIBUTION: [(u8, usize); 26] = [
    (b'A', 9),
    (b'B', 2),
    (b'C', 2),
    (b'D', 4),
    (b'E', 12),
    (b'F', 2),
    (b'G', 3),
    (b'H', 2),
    (b'I', 9),
    (b'J', 1),
    (b'K', 1),
    (b'L', 4),
    (b'M', 2),
    (b'N', 6),
    (b'O', 8),
    (b'P', 2),
    (b'Q', 1),
    (b'R', 6),
    (b'S', 4),
    (b'T', 6),
    (b'U', 4),
    (b'V', 2),
    (b'W', 2),
    (b'X', 1),
    (b'Y', 2),
    (b'Z', 1),
];

/// A bag of letter tiles drawn in random order
///
/// Restocks itself from the full distribution whenever it runs dry, so
/// `draw` always yields a letter.
pub struct LetterBag {
    tiles: Vec<u8>,
    rng: StdRng,
}

impl LetterBag {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A bag with a fixed RNG seed, for reproducible games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut bag = Self {
            tiles: Vec::new(),
            rng,
        };
        bag.restock();
        bag
    }

    /// A bag holding exactly the given tiles, for deterministic setups
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        Self {
            tiles: letters.to_vec(),
            rng: StdRng::seed_from_u64(0),
        }
    }

    fn restock(&mut self) {
        self.tiles.clear();
        for (letter, count) in LETTER_DISTRIBUTION {
            for _ in 0..count {
                self.tiles.push(letter);
            }
        }
    }

    /// Draw a random tile, restocking first if the bag is empty
    pub fn draw(&mut self) -> u8 {
        if self.tiles.is_empty() {
            self.restock();
        }
        let idx = self.rng.random_range(0..self.tiles.len());
        self.tiles.swap_remove(idx)
    }

    /// Put a tile back, used when a placement is undone
    pub fn return_tile(&mut self, letter: u8) {
        self.tiles.push(letter);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }
}

impl Default for LetterBag {
    fn default() -> Self {
        Self::new()
    }
}

/// State snapshot for undo functionality
#[derive(Clone)]
pub struct StateSnapshot {
    pub grid: Grid,
    pub cursor: Coord,
    pub score: u32,
    pub credited: FxHashSet<String>,
    pub found_log: Vec<(String, u32)>,
    pub placed: usize,
    pub next_letters: VecDeque<u8>,
}

/// Application state
pub struct App<'a> {
    pub grid: Grid,
    pub cursor: Coord,
    pub bag: LetterBag,
    pub next_letters: VecDeque<u8>,
    pub score: u32,
    pub credited: FxHashSet<String>,
    /// Credited words in the order they were found, with their points
    pub found_log: Vec<(String, u32)>,
    pub placed: usize,
    pub dictionary: &'a Dictionary,
    pub policy: ScorePolicy,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub undo_stack: Vec<StateSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Placing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    /// A fresh game on an empty `rows` x `cols` board
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, rows: usize, cols: usize) -> Self {
        Self::with_bag(dictionary, rows, cols, LetterBag::new())
    }

    /// A fresh game drawing from the supplied bag
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn with_bag(
        dictionary: &'a Dictionary,
        rows: usize,
        cols: usize,
        mut bag: LetterBag,
    ) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one cell");

        let mut next_letters = VecDeque::with_capacity(PREVIEW_LETTERS);
        for _ in 0..PREVIEW_LETTERS {
            next_letters.push_back(bag.draw());
        }

        Self {
            grid: Grid::new(rows, cols),
            cursor: Coord::new(0, 0),
            bag,
            next_letters,
            score: 0,
            credited: FxHashSet::default(),
            found_log: Vec::new(),
            placed: 0,
            dictionary,
            policy: ScorePolicy::default(),
            messages: vec![
                Message {
                    text: "Welcome! Place letters to build words along rows and columns."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Arrows/hjkl move, Enter places, 'u' undoes.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Placing,
            undo_stack: Vec::new(),
        }
    }

    /// The letter the next placement will use
    #[must_use]
    pub fn current_letter(&self) -> Option<u8> {
        self.next_letters.front().copied()
    }

    /// Move the cursor, clamped to the board
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = self
            .cursor
            .row
            .saturating_add_signed(d_row)
            .min(self.grid.rows() - 1);
        let col = self
            .cursor
            .col
            .saturating_add_signed(d_col)
            .min(self.grid.cols() - 1);
        self.cursor = Coord::new(row, col);
    }

    /// Place the current letter at the cursor and credit any new words
    pub fn place_letter(&mut self) {
        if self.input_mode == InputMode::GameOver {
            return;
        }

        let Coord { row, col } = self.cursor;
        if self.grid.letter(row, col).is_some() {
            self.add_message("That cell is taken. Pick an empty one.", MessageStyle::Error);
            return;
        }
        let Some(&letter) = self.next_letters.front() else {
            return;
        };

        self.undo_stack.push(self.snapshot());

        self.next_letters.pop_front();
        self.next_letters.push_back(self.bag.draw());
        self.grid.set_letter(row, col, Some(letter));
        self.placed += 1;

        let outcome = score(&self.grid, self.dictionary, &self.policy);
        let delta = novel_word_delta(&self.credited, &outcome.hits);

        if delta.points > 0 {
            self.score += delta.points;
            self.add_message(
                &format!(
                    "+{} points: {}",
                    delta.points,
                    delta.newly_credited.join(", ")
                ),
                MessageStyle::Success,
            );
        }
        for word in delta.newly_credited {
            self.found_log.push((word.clone(), word.len() as u32));
            self.credited.insert(word);
        }

        if self.grid.is_full() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.stats.games_played += 1;
        self.stats.best_score = self.stats.best_score.max(self.score);

        let celebration = match self.score {
            0 => "😶 Board full. Not a single word!",
            1..=19 => "🙂 Board full! A modest haul.",
            20..=49 => "👏 Board full! Nice word-building!",
            50..=99 => "✨ Board full! Excellent coverage!",
            _ => "🔥 Board full! A monster score!",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for a new board or 'q' to quit.", MessageStyle::Info);
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            grid: self.grid.clone(),
            cursor: self.cursor,
            score: self.score,
            credited: self.credited.clone(),
            found_log: self.found_log.clone(),
            placed: self.placed,
            next_letters: self.next_letters.clone(),
        }
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            // The tile drawn to replace the placed one goes back in the bag
            if let Some(&drawn) = self.next_letters.back() {
                self.bag.return_tile(drawn);
            }
            self.grid = snapshot.grid;
            self.cursor = snapshot.cursor;
            self.score = snapshot.score;
            self.credited = snapshot.credited;
            self.found_log = snapshot.found_log;
            self.placed = snapshot.placed;
            self.next_letters = snapshot.next_letters;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.cursor = Coord::new(0, 0);
        self.score = 0;
        self.credited.clear();
        self.found_log.clear();
        self.placed = 0;
        self.undo_stack.clear();
        self.messages.clear();
        self.input_mode = InputMode::Placing;

        self.bag.restock();
        self.next_letters.clear();
        for _ in 0..PREVIEW_LETTERS {
            self.next_letters.push_back(self.bag.draw());
        }

        self.add_message(
            "New board! Place letters to build words.",
            MessageStyle::Info,
        );
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_game();
                        }
                        _ => {
                            // Board is full, only new game or quit make sense
                        }
                    }
                }
                InputMode::Placing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.move_cursor(-1, 0);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.move_cursor(1, 0);
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.move_cursor(0, -1);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.move_cursor(0, 1);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        app.place_letter();
                    }
                    _ => {}
                },
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
    use crate::engine::DedupeMode;

    fn uniform_app(dictionary: &Dictionary, rows: usize, cols: usize) -> App<'_> {
        App::with_bag(dictionary, rows, cols, LetterBag::from_letters(&[b'A'; 32]))
    }

    #[test]
    fn bag_starts_with_full_distribution() {
        let bag = LetterBag::seeded(1);
        assert_eq!(bag.remaining(), 98);
    }

    #[test]
    fn bag_restocks_when_empty() {
        let mut bag = LetterBag::seeded(1);
        for _ in 0..98 {
            bag.draw();
        }
        assert_eq!(bag.remaining(), 0);

        bag.draw();
        assert_eq!(bag.remaining(), 97);
    }

    #[test]
    fn custom_bag_yields_its_letters() {
        let mut bag = LetterBag::from_letters(&[b'Q']);
        assert_eq!(bag.draw(), b'Q');
    }

    #[test]
    fn returned_tiles_can_be_drawn_again() {
        let mut bag = LetterBag::from_letters(&[]);
        bag.return_tile(b'B');
        assert_eq!(bag.remaining(), 1);
        assert_eq!(bag.draw(), b'B');
    }

    #[test]
    fn app_starts_ready_to_place() {
        let dictionary = Dictionary::trusted(["AA"]);
        let app = uniform_app(&dictionary, 4, 4);

        assert_eq!(app.next_letters.len(), PREVIEW_LETTERS);
        assert_eq!(app.current_letter(), Some(b'A'));
        assert_eq!(app.score, 0);
        assert_eq!(app.input_mode, InputMode::Placing);
    }

    #[test]
    fn cursor_clamps_to_board_edges() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 3);

        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, Coord::new(0, 0));

        app.move_cursor(10, 10);
        assert_eq!(app.cursor, Coord::new(1, 2));
    }

    #[test]
    fn occupied_cell_rejects_placement() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.place_letter();
        app.place_letter();

        assert_eq!(app.placed, 1);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn words_are_credited_once_per_game() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.place_letter();
        assert_eq!(app.score, 0);

        app.move_cursor(0, 1);
        app.place_letter();
        assert_eq!(app.score, 2);
        assert_eq!(app.found_log, [("AA".to_string(), 2)]);

        // Column "AA" repeats the same text; no second credit
        app.move_cursor(1, -1);
        app.place_letter();
        assert_eq!(app.score, 2);
        assert_eq!(app.found_log.len(), 1);
    }

    #[test]
    fn running_score_matches_per_text_rescore() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();
        app.move_cursor(1, -1);
        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();

        let per_text = ScorePolicy {
            dedupe: DedupeMode::PerText,
            ..ScorePolicy::default()
        };
        let outcome = score(&app.grid, &dictionary, &per_text);
        assert_eq!(app.score, outcome.total);
    }

    #[test]
    fn full_board_ends_the_game() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();
        app.move_cursor(1, -1);
        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();

        assert!(app.grid.is_full());
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.best_score, app.score);
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();
        assert_eq!(app.score, 2);

        app.undo_last();

        assert_eq!(app.score, 0);
        assert_eq!(app.placed, 1);
        assert!(app.credited.is_empty());
        assert!(app.found_log.is_empty());
        assert_eq!(app.grid.letter(0, 1), None);
        assert_eq!(app.cursor, Coord::new(0, 1));
        assert_eq!(app.next_letters.len(), PREVIEW_LETTERS);
    }

    #[test]
    fn undo_with_nothing_to_undo_reports_it() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.undo_last();

        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn new_game_clears_the_board_but_keeps_stats() {
        let dictionary = Dictionary::trusted(["AA"]);
        let mut app = uniform_app(&dictionary, 2, 2);

        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();
        app.move_cursor(1, -1);
        app.place_letter();
        app.move_cursor(0, 1);
        app.place_letter();
        assert_eq!(app.stats.games_played, 1);

        app.new_game();

        assert!(app.grid.is_blank());
        assert_eq!(app.score, 0);
        assert!(app.credited.is_empty());
        assert_eq!(app.input_mode, InputMode::Placing);
        assert_eq!(app.stats.games_played, 1);
    }
}
