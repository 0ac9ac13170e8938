//! Status bar component
//!
//! Shows the last status message on the bottom row together with key hints.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::widgets::status_bar::StatusBarWidget};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.get_or_default("status");
        let widget = StatusBarWidget::new(state.system.status_message.as_deref(), style);
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::core::msg::system::SystemMsg;

    #[test]
    fn test_view_shows_status_message() {
        let mut state = AppState::default();
        state
            .system
            .update(SystemMsg::UpdateStatusMessage("[Moved] Info to position 3".into()));

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| StatusBarComponent::new().view(&state, frame, frame.area()))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();

        assert!(content.starts_with("[Moved] Info to position 3"));
    }
}
