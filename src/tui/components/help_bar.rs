use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const HELP_TEXT: &str =
    "Press ``s'' to show next frame, ``a'' the previous frame, and ``q'' to exit.";

/// Single line of key instructions pinned to the bottom of the screen.
pub struct HelpBar;

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, area);
    }
}
