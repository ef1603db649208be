//! # Viewer State
//!
//! The position in the frame set, and nothing else.
//!
//! ```text
//! ViewerState
//! ├── current: usize          // 0-based index of the frame on screen
//! └── len: NonZeroUsize       // frame count, fixed at startup
//! ```
//!
//! Stepping wraps in both directions, so `current < len` always holds.
//! State changes only happen through `update(state, action)` in action.rs.

use std::num::NonZeroUsize;

use crate::core::frames::FrameSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
    current: usize,
    len: NonZeroUsize,
}

impl ViewerState {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { current: 0, len }
    }

    pub fn for_frames(frames: &FrameSet) -> Self {
        // FrameSet::new refuses empty lists
        let len = NonZeroUsize::new(frames.len()).unwrap_or(NonZeroUsize::MIN);
        Self::new(len)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn frame_count(&self) -> NonZeroUsize {
        self.len
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len.get();
    }

    pub fn previous(&mut self) {
        let len = self.len.get();
        self.current = (self.current + len - 1) % len;
    }

    /// The `"<current> / <total>"` counter, 1-based.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}
