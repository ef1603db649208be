use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A printable key was pressed.
    Char(char),
    /// Terminal was resized; just redraw.
    Resize,
    /// Anything else (special keys, key releases, mouse, focus).
    Other,
}

impl TuiEvent {
    pub fn action(self) -> Action {
        match self {
            TuiEvent::Char(c) => Action::from_char(c),
            TuiEvent::Resize | TuiEvent::Other => Action::Ignore,
        }
    }
}

/// Where the navigation loop gets its keypresses from.
pub trait InputSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> io::Result<TuiEvent>;
}

/// Reads events from the real terminal. Raw mode must already be on.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        let event = event::read()?;
        Ok(translate(event))
    }
}

/// Map a crossterm event onto a `TuiEvent`.
pub fn translate(event: Event) -> TuiEvent {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} ({:?}) with modifiers {:?}",
                key_event.code,
                key_event.kind,
                key_event.modifiers
            );
            // Windows reports releases too; only presses count as a keypress
            if key_event.kind == KeyEventKind::Release {
                return TuiEvent::Other;
            }
            match key_event.code {
                KeyCode::Char(c) => TuiEvent::Char(c),
                _ => TuiEvent::Other,
            }
        }
        Event::Resize(..) => TuiEvent::Resize,
        _ => TuiEvent::Other,
    }
}
