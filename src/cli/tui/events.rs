use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::Result;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Nothing arrived before the poll timeout
    Tick,
}

/// Wait up to `timeout` for the next terminal event
pub fn next_event(timeout: Duration) -> Result<AppEvent> {
    if !event::poll(timeout)? {
        return Ok(AppEvent::Tick);
    }

    let event = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
        Event::Resize(width, height) => AppEvent::Resize(width, height),
        _ => AppEvent::Tick,
    };
    Ok(event)
}
