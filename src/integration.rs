//! Integration layer
//!
//! Glues the pure core to the terminal:
//! - `Runtime` owns the state and the message/command queues
//! - `AppRunner` pumps terminal events through it and renders
pub mod app_runner;
pub mod runtime;
