//! Page shell component
//!
//! Renders the form builder chrome around the page strip: a title, the
//! bordered container, the strip itself, the state readout and, on top of
//! everything, the open context menu.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        layout::{MenuLayout, ShellLayout, StripLayout, PAGE_SHELL_TITLE},
        widgets::{
            context_menu::ContextMenuWidget, page_strip::PageStripWidget,
            state_panel::StatePanelWidget,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct PageShellComponent;

impl PageShellComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the shell into `area`, which must be the whole frame so the
    /// geometry matches what mouse hit-testing computes from the viewport
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let navigation = &state.navigation;
        let shell = ShellLayout::new(area);

        frame.render_widget(
            Line::styled(PAGE_SHELL_TITLE, styles.get_or_default("title")),
            shell.title,
        );
        frame.render_widget(
            ShellLayout::container_block().style(styles.get_or_default("container")),
            shell.container,
        );

        let strip = StripLayout::compute(navigation, shell.strip);
        frame.render_widget(
            PageStripWidget::new(navigation, &strip, styles),
            shell.strip,
        );
        frame.render_widget(StatePanelWidget::new(navigation, styles), shell.panel);

        if let Some(menu) = MenuLayout::for_navigation(navigation, &strip, &shell, area) {
            frame.render_widget(
                ContextMenuWidget::new(navigation.menu(), &menu, styles),
                area,
            );
        }
    }
}
