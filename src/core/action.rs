//! # Actions
//!
//! Every keypress becomes an `Action`. `a` is `Action::Previous`,
//! `s` is `Action::Next`, `q` is `Action::Quit`, anything else is
//! `Action::Ignore`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the loop has to carry out. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::ViewerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Quit,
    /// Any input without a binding. Still triggers a redraw.
    Ignore,
}

impl Action {
    /// Key binding for a typed character.
    pub fn from_char(c: char) -> Self {
        match c {
            'a' => Action::Previous,
            's' => Action::Next,
            'q' => Action::Quit,
            _ => Action::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Quit,
}

pub fn update(state: &mut ViewerState, action: Action) -> Effect {
    debug!("update: {:?} at {}", action, state.position_label());
    match action {
        Action::Previous => {
            state.previous();
            Effect::Redraw
        }
        Action::Next => {
            state.next();
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
        Action::Ignore => Effect::Redraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn state(len: usize) -> ViewerState {
        ViewerState::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_from_char_bindings() {
        assert_eq!(Action::from_char('a'), Action::Previous);
        assert_eq!(Action::from_char('s'), Action::Next);
        assert_eq!(Action::from_char('q'), Action::Quit);
        assert_eq!(Action::from_char('A'), Action::Ignore);
        assert_eq!(Action::from_char(' '), Action::Ignore);
    }

    #[test]
    fn test_three_nexts_return_to_start() {
        let mut s = state(3);
        for _ in 0..3 {
            assert_eq!(update(&mut s, Action::Next), Effect::Redraw);
        }
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn test_previous_from_start_goes_to_last() {
        let mut s = state(3);
        update(&mut s, Action::Previous);
        assert_eq!(s.current(), 2);
    }

    #[test]
    fn test_ignore_leaves_state_unchanged() {
        let mut s = state(4);
        update(&mut s, Action::Next);
        let before = s;
        assert_eq!(update(&mut s, Action::Ignore), Effect::Redraw);
        assert_eq!(s, before);
    }

    #[test]
    fn test_quit_does_not_move() {
        let mut s = state(2);
        update(&mut s, Action::Next);
        assert_eq!(update(&mut s, Action::Quit), Effect::Quit);
        assert_eq!(s.current(), 1);
    }
}
