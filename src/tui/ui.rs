use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::frames::FrameSet;
use crate::core::state::ViewerState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, Slide};

/// Draws the whole screen: counter, frame text, a blank line, key help.
pub fn draw_ui(frame: &mut Frame, frames: &FrameSet, state: &ViewerState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(1), Length(1)]);
    let [slide_area, _gap, help_area] = layout.areas(frame.area());

    let content = frames
        .get(state.current())
        .map(|f| f.content())
        .unwrap_or_default();
    Slide::new(state.position_label(), content).render(frame, slide_area);
    HelpBar.render(frame, help_area);
}
