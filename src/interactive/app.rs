//! TUI application state and logic

use crate::core::WordSet;
use crate::puzzle::{
    Outcome, PuzzleConfig, PuzzleSession, SessionError, SessionState, UNDO_COMMAND,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub words: &'a WordSet,
    pub config: PuzzleConfig,
    pub session: PuzzleSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Filling,
    Finished(Outcome),
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
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app with a freshly generated puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated from `words`.
    pub fn new(
        words: &'a WordSet,
        config: PuzzleConfig,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let session = PuzzleSession::generate(words, &config, &mut rng)?;
        let mut app = Self {
            words,
            config,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Filling,
            rng,
        };
        app.announce_puzzle();
        Ok(app)
    }

    fn announce_puzzle(&mut self) {
        let text = format!(
            "Climb from {} to {} in {} steps.",
            self.session.start().text().to_uppercase(),
            self.session.end().text().to_uppercase(),
            self.session.len() - 1
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Submit the input buffer as the next word, or as an undo command
    pub fn handle_submit(&mut self) {
        if self.input_mode != InputMode::Filling {
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.session.apply(&input) {
            Ok(SessionState::Filling) => {}
            Ok(SessionState::Completed) => self.complete(),
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    pub fn undo_last(&mut self) {
        if self.input_mode != InputMode::Filling {
            return;
        }

        match self.session.undo() {
            Ok(_) => self.add_message("Undone!", MessageStyle::Info),
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    fn complete(&mut self) {
        let Some(outcome) = self.session.finish() else {
            return;
        };

        self.stats.total_games += 1;
        match outcome {
            Outcome::Win => {
                self.stats.games_won += 1;
                self.add_message("🎉 You win! 🎉", MessageStyle::Success);
            }
            Outcome::Lose => {
                self.add_message("You lose...", MessageStyle::Error);
                let solution = self.session.solution().to_string();
                self.add_message(&format!("Solution: {solution}"), MessageStyle::Info);
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::Finished(outcome);
    }

    /// Replace the session with a newly generated puzzle
    pub fn new_game(&mut self) {
        match PuzzleSession::generate(self.words, &self.config, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Filling;
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_puzzle();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
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

    /// Accept a typed character if it fits in a word or the undo command
    pub fn push_char(&mut self, c: char) {
        let limit = self.session.word_length().max(UNDO_COMMAND.len());
        if c.is_ascii_alphabetic() && self.input_buffer.len() < limit {
            self.input_buffer.push(c);
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
    with_logging_silenced(|| draw_tui(app))
}

/// Run `f` with the global log level turned off, restoring it afterwards
///
/// stderr shares the alternate screen with the frame, so records would be
/// drawn over it.
fn with_logging_silenced<T>(f: impl FnOnce() -> T) -> T {
    let previous = log::max_level();
    log::set_max_level(LevelFilter::Off);
    let result = f();
    log::set_max_level(previous);
    result
}

fn draw_tui(app: App) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Finished(_) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Filling => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.undo_last();
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.handle_submit(),
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
