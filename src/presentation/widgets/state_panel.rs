use ratatui::{prelude::*, widgets::Paragraph};

use crate::{model::page_navigation::PageNavigation, presentation::config::Styles};

/// "Current State" readout under the strip
pub struct StatePanelWidget<'a> {
    navigation: &'a PageNavigation,
    styles: &'a Styles,
}

impl<'a> StatePanelWidget<'a> {
    pub fn new(navigation: &'a PageNavigation, styles: &'a Styles) -> Self {
        Self { navigation, styles }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let active = self
            .navigation
            .active_page()
            .map(|page| page.name.clone())
            .unwrap_or_default();
        let label = |name: &'static str| Span::raw(name).bold();
        vec![
            Line::from(Span::raw("Current State:").bold()),
            Line::from(vec![label("Active Page: "), Span::raw(active)]),
            Line::from(vec![
                label("Total Pages: "),
                Span::raw(self.navigation.len().to_string()),
            ]),
            Line::from(vec![
                label("Page Order: "),
                Span::raw(self.navigation.page_order()),
            ]),
        ]
    }
}

impl<'a> Widget for StatePanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.lines())
            .style(self.styles.get_or_default("panel"))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lines_after_insert() {
        let mut navigation = PageNavigation::default();
        navigation.insert_after(1);
        let styles = Styles::default();
        let text: Vec<String> = StatePanelWidget::new(&navigation, &styles)
            .lines()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            text,
            vec![
                "Current State:",
                "Active Page: Page 5",
                "Total Pages: 5",
                "Page Order: Info → Details → Page 5 → Other → Ending",
            ]
        );
    }

    #[test]
    fn test_dangling_active_id_shows_empty_name() {
        let mut navigation = PageNavigation::default();
        navigation.set_active("42".into());
        let styles = Styles::default();
        let lines = StatePanelWidget::new(&navigation, &styles).lines();
        assert_eq!(lines[1].to_string(), "Active Page: ");
    }
}
