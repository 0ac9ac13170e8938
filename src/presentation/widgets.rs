//! Reusable widgets
//!
//! Widgets are plain ratatui `Widget`s built from borrowed state; they hold
//! no state of their own between frames.

pub mod context_menu;
pub mod page_strip;
pub mod page_tab;
pub mod state_panel;
pub mod status_bar;
