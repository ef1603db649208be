//! # TUI Adapter
//!
//! The ratatui-specific layer. Puts the terminal in raw mode, draws the
//! current frame, and turns keypresses into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! Strictly one key per redraw: draw, block on `read()`, apply the action,
//! draw again. There is no polling and no timeout, so an idle viewer uses
//! no CPU.

mod component;
mod components;
pub mod event;
mod ui;

use std::io;

use log::{debug, info, warn};
use ratatui::{DefaultTerminal, Terminal, backend::Backend};

use crate::core::action::{Effect, update};
use crate::core::frames::FrameSet;
use crate::core::state::ViewerState;
use crate::tui::event::{CrosstermInput, InputSource};

pub use components::HELP_TEXT;
pub use ui::draw_ui;

/// Raw mode and the alternate screen, held for the life of the viewer.
///
/// `restore()` is the normal way out and reports failures. Error and panic
/// paths restore in `Drop`.
struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    fn enter() -> io::Result<(Self, DefaultTerminal)> {
        let terminal = ratatui::try_init()?;
        info!("Terminal in raw mode");
        Ok((Self { restored: false }, terminal))
    }

    fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        ratatui::try_restore()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored
            && let Err(e) = ratatui::try_restore()
        {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Runs the viewer on the real terminal until `q` is pressed.
pub fn run(frames: &FrameSet) -> io::Result<()> {
    let (session, mut terminal) = TerminalSession::enter()?;
    let state = drive(&mut terminal, frames, &mut CrosstermInput)?;
    info!(
        "Quit at frame {} of {}",
        state.current() + 1,
        state.frame_count()
    );
    session.restore()
}

/// The draw/read/update cycle, over any backend and input source.
///
/// Returns the final state once a `Quit` action arrives. Any I/O error from
/// drawing or reading input ends the loop and is returned as-is.
pub fn drive<B: Backend>(
    terminal: &mut Terminal<B>,
    frames: &FrameSet,
    input: &mut impl InputSource,
) -> io::Result<ViewerState> {
    let mut state = ViewerState::for_frames(frames);

    loop {
        terminal
            .draw(|f| ui::draw_ui(f, frames, &state))
            .map_err(|e| io::Error::other(e.to_string()))?;

        let event = input.next_event()?;
        let action = event.action();
        debug!("Event {:?} -> {:?}", event, action);

        if update(&mut state, action) == Effect::Quit {
            return Ok(state);
        }
    }
}
