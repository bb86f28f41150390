use crate::game::{CELLS, SIZE};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Input poll timeout; also bounds how late the bot's reply can land.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    session: Session,
    cursor: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            cursor: CELLS / 2, // Start in the centre
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.session.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, Instant::now());
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Clear message on any key press
        self.message = None;

        let (row, col) = (self.cursor / SIZE, self.cursor % SIZE);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') if col > 0 => self.cursor -= 1,
            KeyCode::Right | KeyCode::Char('l') if col + 1 < SIZE => self.cursor += 1,
            KeyCode::Up | KeyCode::Char('k') if row > 0 => self.cursor -= SIZE,
            KeyCode::Down | KeyCode::Char('j') if row + 1 < SIZE => self.cursor += SIZE,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select(now);
            }
            KeyCode::Char('r') => {
                self.session.reset(now);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Select the cell under the cursor
    fn select(&mut self, now: Instant) {
        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.session.bot_pending() {
            self.message = Some("Tigers are thinking...".to_string());
            return;
        }
        self.session.select_cell(self.cursor, now);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.cursor, &self.message);
    }
}
