//! Domain logic
//!
//! This module contains the form-page vocabulary:
//! - Pages, icons and the id counter
//! - Ordered list helpers (move, insert)
//! - Context menu entries

pub mod collections;
pub mod page;
pub mod ui;
