//! # Slide Component
//!
//! Renders the `"<current> / <total>"` counter on its own line, followed by
//! the frame text exactly as it was read from disk.
//!
//! Frames are usually hand-laid ASCII drawings, so the text is neither
//! wrapped nor trimmed. Lines wider or taller than the area are clipped.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Slide<'a> {
    /// Counter text, e.g. `"2 / 5"`
    pub position: String,
    /// Frame text
    pub content: &'a str,
}

impl<'a> Slide<'a> {
    pub fn new(position: String, content: &'a str) -> Self {
        Self { position, content }
    }
}

impl Component for Slide<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [counter_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let counter = Paragraph::new(self.position.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(counter, counter_area);

        frame.render_widget(Paragraph::new(Text::raw(self.content)), body_area);
    }
}
