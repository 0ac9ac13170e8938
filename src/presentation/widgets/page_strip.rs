use ratatui::{
    prelude::*,
    symbols::border,
    widgets::{Block, Paragraph},
};

use crate::{
    model::page_navigation::PageNavigation,
    presentation::{
        config::Styles,
        layout::{StripLayout, ADD_BUTTON_LABEL, TAB_HEIGHT},
        widgets::page_tab::{PageTabWidget, TabLook},
    },
};

/// Rounded corners with dashed edges
pub const DASHED: border::Set = border::Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "┆",
    vertical_right: "┆",
    horizontal_top: "┄",
    horizontal_bottom: "┄",
};

const CONNECTOR_LINE: &str = "╌";
const INSERT_BUTTON: &str = "+";

/// The horizontal strip of page tabs
///
/// Everything is drawn at unscrolled positions into a scratch buffer and the
/// window starting at `layout.offset` is copied out, so tabs cut by an edge
/// keep their borders where they belong.
pub struct PageStripWidget<'a> {
    navigation: &'a PageNavigation,
    layout: &'a StripLayout,
    styles: &'a Styles,
}

impl<'a> PageStripWidget<'a> {
    pub fn new(navigation: &'a PageNavigation, layout: &'a StripLayout, styles: &'a Styles) -> Self {
        Self {
            navigation,
            layout,
            styles,
        }
    }

    fn render_tabs(&self, scratch: &mut Buffer) {
        let drag = self.navigation.drag();
        for slot in &self.layout.tabs {
            let Some(page) = self.navigation.page(slot.index) else {
                continue;
            };
            let look = TabLook {
                is_active: self.navigation.is_active(&page.id),
                shows_trigger: !drag.is_dragging()
                    && self.navigation.is_menu_trigger_visible(&page.id),
                is_dragged: self.navigation.is_dragged(&page.id),
                is_drop_target: drag.target() == Some(slot.index)
                    && !self.navigation.is_dragged(&page.id),
            };
            PageTabWidget::new(page, look, self.styles).render(slot.full, scratch);
        }
    }

    fn render_connectors(&self, scratch: &mut Buffer) {
        let line_style = self.styles.get_or_default("connector");
        for slot in &self.layout.connectors {
            let middle = Rect {
                y: slot.full.y + slot.full.height / 2,
                height: 1,
                ..slot.full
            };
            let line = if self.navigation.is_insert_button_visible(slot.after) {
                Line::from(vec![
                    Span::styled(CONNECTOR_LINE, line_style),
                    Span::styled(INSERT_BUTTON, self.styles.get_or_default("insert_button")),
                    Span::styled(CONNECTOR_LINE, line_style),
                ])
            } else {
                Line::styled(CONNECTOR_LINE.repeat(usize::from(middle.width)), line_style)
            };
            Paragraph::new(line).render(middle, scratch);
        }
        if let Some(trailing) = self.layout.trailing {
            let middle = Rect {
                y: trailing.full.y + trailing.full.height / 2,
                height: 1,
                ..trailing.full
            };
            Paragraph::new(Line::styled(
                CONNECTOR_LINE.repeat(usize::from(middle.width)),
                line_style,
            ))
            .render(middle, scratch);
        }
    }

    fn render_add_button(&self, scratch: &mut Buffer) {
        let Some(button) = self.layout.add_button else {
            return;
        };
        let style = self.styles.get_or_default("add_button");
        Paragraph::new(ADD_BUTTON_LABEL)
            .style(style)
            .block(Block::bordered().border_set(DASHED).border_style(style))
            .render(button.full, scratch);
    }
}

impl<'a> Widget for PageStripWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let height = area.height.min(TAB_HEIGHT);
        if self.layout.total_width == 0 || height == 0 {
            return;
        }
        let mut scratch = Buffer::empty(Rect::new(0, 0, self.layout.total_width, height));
        self.render_tabs(&mut scratch);
        self.render_connectors(&mut scratch);
        self.render_add_button(&mut scratch);

        for column in 0..area.width {
            let source_x = self.layout.offset.saturating_add(column);
            if source_x >= self.layout.total_width {
                break;
            }
            for row in 0..height {
                let Some(cell) = scratch.cell((source_x, row)) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut((area.x + column, area.y + row)) {
                    *target = cell.clone();
                }
            }
        }
    }
}
