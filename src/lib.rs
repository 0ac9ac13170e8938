//! # pagenav - form page navigation for the terminal
//!
//! A horizontal strip of form-page tabs that can be reordered by dragging,
//! extended through "+" buttons between tabs, and managed through a
//! per-page context menu. Built on ratatui with an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`, `model`): application state and the page navigation model
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): side effects for the host to run
//! - **View** (`presentation`): stateless rendering of the state
//!
//! Terminal input arrives as [`RawMsg`] and is turned into domain [`Msg`]s by
//! [`translate_raw_to_domain`], which resolves mouse positions against the
//! same layout the view draws.
//!
//! ## Example Usage
//!
//! ```rust
//! use pagenav::{core::msg::navigation::NavigationMsg, update, AppState, Msg};
//!
//! let state = AppState::default();
//! let (state, _commands) = update(Msg::Navigation(NavigationMsg::InsertAfter(1)), state);
//!
//! assert_eq!(
//!     state.navigation.page_order(),
//!     "Info → Details → Page 5 → Other → Ending"
//! );
//! assert_eq!(state.active_page_name(), Some("Page 5"));
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
