//! Elm-style component models
//!
//! Each model owns its state and changes only through `update(Message)`.

pub mod page_navigation;
