use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    DefaultTerminal, Frame,
};

use super::events::{next_event, AppEvent};
use super::state::{KeyOutcome, ScreenState};
use super::theme::Theme;
use crate::view::CatalogView;
use crate::Result;

/// How long to wait for input before redrawing
const TICK_RATE: Duration = Duration::from_millis(250);

/// Window for the second Ctrl+C press
const CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    state: ScreenState,
    /// Whether the app should quit
    should_quit: bool,
    theme: Theme,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance
    pub fn new(view: CatalogView) -> Self {
        Self {
            state: ScreenState::new(view),
            should_quit: false,
            theme: Theme::default(),
            last_ctrl_c: None,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application until the user quits
    pub fn run(mut self) -> Result<CatalogView> {
        let mut terminal = ratatui::init();
        tracing::info!(books = self.state.view.len(), "Catalog screen opened");

        let result = self.main_loop(&mut terminal);

        // Restore the terminal even when the loop failed
        ratatui::restore();
        result?;

        tracing::info!(books = self.state.view.len(), "Catalog screen closed");
        Ok(self.state.view)
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            let event = next_event(TICK_RATE)?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// Draw the current state
    pub fn render(&self, frame: &mut Frame) {
        super::screens::catalog::render(frame, &self.state, &self.theme);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            // The next draw picks up the new size
            AppEvent::Resize(..) | AppEvent::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < CTRL_C_WINDOW)
            {
                self.should_quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.state.status = Some("Press Ctrl+C again to quit".to_string());
            }
            return;
        }

        self.state.status = None;
        match self.state.handle_key(key) {
            KeyOutcome::Quit => self.should_quit = true,
            KeyOutcome::Handled => {}
            KeyOutcome::Ignored => {
                tracing::trace!(code = ?key.code, mode = ?self.state.mode, "Key ignored");
            }
        }
    }
}
