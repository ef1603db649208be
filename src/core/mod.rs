//! # Core Application Logic
//!
//! Frame loading, viewer state and configuration.
//! Nothing here touches the terminal.
//!
//! ```text
//!        ┌──────────────┐   FrameSet   ┌──────────────────────┐
//!        │   frames     │ ───────────▶ │  state + action      │
//!        │ (directory   │  (immutable) │  ViewerState         │
//!        │   scan)      │              │  update() (reducer)  │
//!        └──────┬───────┘              └──────────┬───────────┘
//!               │                                 │
//!               │ ResolvedConfig                  │ Effect
//!        ┌──────┴───────┐              ┌──────────▼───────────┐
//!        │   config     │              │        TUI           │
//!        └──────────────┘              │ (ratatui/crossterm)  │
//!                                      └──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`frames`]: `FrameSet` and the directory scan that builds it
//! - [`state`]: `ViewerState`, the only mutable state in the program
//! - [`action`]: `Action` and the `update()` reducer
//! - [`config`]: layered settings (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod frames;
pub mod state;
