//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - terminal setup and the event pump
//! - CLI argument processing
//! - configuration files
pub mod cli;
pub mod config;
pub mod tui;
