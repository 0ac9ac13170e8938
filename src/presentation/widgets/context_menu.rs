use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::{
    model::page_navigation::context_menu::ContextMenu,
    presentation::{config::Styles, layout::MenuLayout},
};

/// Popup listing the per-page menu entries
pub struct ContextMenuWidget<'a> {
    menu: &'a ContextMenu,
    layout: &'a MenuLayout,
    styles: &'a Styles,
}

impl<'a> ContextMenuWidget<'a> {
    pub fn new(menu: &'a ContextMenu, layout: &'a MenuLayout, styles: &'a Styles) -> Self {
        Self {
            menu,
            layout,
            styles,
        }
    }
}

impl<'a> Widget for ContextMenuWidget<'a> {
    /// Draws at the geometry in `layout`; `area` only bounds it
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let menu_area = self.layout.area.intersection(area);
        if menu_area.is_empty() {
            return;
        }
        let style = self.styles.get_or_default("menu");
        Clear.render(menu_area, buf);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(style)
            .render(menu_area, buf);

        let highlighted = self.menu.highlighted_item();
        for (item, rect) in &self.layout.items {
            let mut item_style = style;
            if item.is_destructive() {
                item_style = item_style.patch(self.styles.get_or_default("menu_danger"));
            }
            if highlighted == Some(*item) {
                item_style = item_style.patch(self.styles.get_or_default("menu_highlight"));
            }
            let line = Line::from(format!(" {} {}", item.glyph(), item));
            Paragraph::new(line)
                .style(item_style)
                .render(rect.intersection(area), buf);
        }
        for rect in &self.layout.separators {
            let width = usize::from(rect.width);
            Paragraph::new("─".repeat(width))
                .style(style)
                .render(rect.intersection(area), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        domain::{page::PageId, ui::MenuItem},
        model::page_navigation::context_menu::Message,
    };

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_render_lists_items_with_separator() {
        let mut menu = ContextMenu::new();
        menu.update(Message::Opened(PageId::new("1")));
        let area = Rect::new(0, 0, 30, 12);
        let layout = MenuLayout::anchored(Rect::new(0, 0, 1, 1), area);
        let styles = Styles::default();
        let mut buffer = Buffer::empty(area);

        ContextMenuWidget::new(&menu, &layout, &styles).render(area, &mut buffer);

        assert_eq!(row(&buffer, 2), "╭──────────────────────╮");
        assert_eq!(row(&buffer, 3), "│ ⚑ Set as first page  │");
        assert_eq!(row(&buffer, 4), "│ ✎ Rename             │");
        assert_eq!(row(&buffer, 7), "│──────────────────────│");
        assert_eq!(row(&buffer, 8), "│ ✗ Delete             │");
        assert_eq!(row(&buffer, 9), "╰──────────────────────╯");
    }

    #[test]
    fn test_highlighted_item_is_styled() {
        let mut menu = ContextMenu::new();
        menu.update(Message::Opened(PageId::new("1")));
        menu.update(Message::NextItemHighlighted);
        assert_eq!(menu.highlighted_item(), Some(MenuItem::Rename));

        let area = Rect::new(0, 0, 30, 12);
        let layout = MenuLayout::anchored(Rect::new(0, 0, 1, 1), area);
        let mut styles = Styles::default();
        styles.insert("menu_highlight".into(), Style::default().reversed());
        let mut buffer = Buffer::empty(area);

        ContextMenuWidget::new(&menu, &layout, &styles).render(area, &mut buffer);

        assert!(buffer[(3, 4)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(3, 3)].modifier.contains(Modifier::REVERSED));
    }
}
