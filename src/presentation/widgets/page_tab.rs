use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{domain::page::Page, presentation::config::Styles};

pub const MENU_TRIGGER: &str = "⋯";

/// How a tab is drawn this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabLook {
    pub is_active: bool,
    pub shows_trigger: bool,
    pub is_dragged: bool,
    pub is_drop_target: bool,
}

/// One bordered page tab: icon, name and the menu trigger
pub struct PageTabWidget<'a> {
    page: &'a Page,
    look: TabLook,
    styles: &'a Styles,
}

impl<'a> PageTabWidget<'a> {
    pub fn new(page: &'a Page, look: TabLook, styles: &'a Styles) -> Self {
        Self { page, look, styles }
    }

    fn border_style(&self) -> Style {
        let base = self.styles.get_or_default("tab_border");
        if self.look.is_drop_target {
            base.patch(self.styles.get_or_default("tab_drop_target"))
        } else if self.look.is_active {
            base.patch(self.styles.get_or_default("tab_active_border"))
        } else {
            base
        }
    }

    fn body_style(&self) -> Style {
        let mut style = self.styles.get_or_default("tab");
        if self.look.is_active {
            style = style.patch(self.styles.get_or_default("tab_active"));
        }
        if self.look.is_dragged {
            style = style.patch(self.styles.get_or_default("tab_dragged"));
        }
        style
    }
}

impl<'a> Widget for PageTabWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_type = if self.look.is_drop_target {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(self.border_style())
            .style(self.body_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let icon_style = if self.look.is_active {
            self.styles.get_or_default("icon_active")
        } else {
            self.styles.get_or_default("icon")
        };
        let trigger = if self.look.shows_trigger {
            Span::styled(MENU_TRIGGER, self.styles.get_or_default("menu_trigger"))
        } else {
            Span::raw(" ")
        };
        let line = Line::from(vec![
            Span::styled(self.page.icon.glyph(self.look.is_active), icon_style),
            Span::raw(" "),
            Span::raw(self.page.name.as_str()),
            Span::raw(" "),
            trigger,
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::page::PageIcon;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn render(look: TabLook) -> Buffer {
        let page = Page::new("1", "Info", PageIcon::Circle);
        let styles = Styles::default();
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        PageTabWidget::new(&page, look, &styles).render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_render_inactive_tab() {
        let buffer = render(TabLook::default());
        assert_eq!(row(&buffer, 0), "╭────────╮");
        assert_eq!(row(&buffer, 1), "│○ Info  │");
        assert_eq!(row(&buffer, 2), "╰────────╯");
    }

    #[test]
    fn test_render_active_tab_with_trigger() {
        let buffer = render(TabLook {
            is_active: true,
            shows_trigger: true,
            ..Default::default()
        });
        assert_eq!(row(&buffer, 1), "│● Info ⋯│");
    }

    #[test]
    fn test_drop_target_uses_double_border() {
        let buffer = render(TabLook {
            is_drop_target: true,
            ..Default::default()
        });
        assert_eq!(row(&buffer, 0), "╔════════╗");
    }
}
