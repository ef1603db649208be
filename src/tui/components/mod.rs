//! # TUI Components
//!
//! Both components are stateless: they are built fresh on every draw from
//! the frame set and the viewer state, render, and are dropped.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── slide.rs        (counter line + frame text)
//! └── help_bar.rs     (key instructions)
//! ```

mod help_bar;
mod slide;

pub use help_bar::{HELP_TEXT, HelpBar};
pub use slide::Slide;
