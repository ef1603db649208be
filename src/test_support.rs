//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::fs;
use std::io;

use ratatui::buffer::Buffer;
use tempfile::TempDir;

use crate::tui::event::{InputSource, TuiEvent};

/// Creates a scratch directory holding the given `(file name, content)` pairs.
pub fn frame_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

/// Input source that replays a fixed list of keys, then reports EOF.
pub struct ScriptedInput {
    events: VecDeque<TuiEvent>,
}

impl ScriptedInput {
    pub fn keys(keys: &str) -> Self {
        Self {
            events: keys.chars().map(TuiEvent::Char).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// Flattens a rendered buffer into lines of text, right-trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
