//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::ShellLayout};

pub mod page_shell;
pub mod status_bar;

pub use page_shell::PageShellComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
pub struct Components {
    pub page_shell: PageShellComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            page_shell: PageShellComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        // The context menu may overlap the status row, so the shell goes last
        self.status_bar
            .view(state, frame, ShellLayout::new(area).status);
        self.page_shell.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
