//! Hover state of the page strip
//!
//! Purely cosmetic: it decides whether the insert button of a connector and
//! the menu trigger of a page are drawn. It never changes the page list.

use crate::domain::page::PageId;

/// Messages that can be sent to update the hover state
pub enum Message {
    /// The pointer entered (Some) or left (None) the connector after page `i`
    InsertionPointHovered(Option<usize>),
    /// The pointer entered (Some) or left (None) a page tab
    PageHovered(Option<PageId>),
    /// Both hover targets were cleared, e.g. when the pointer left the strip
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hover {
    insertion_point: Option<usize>,
    page: Option<PageId>,
}

impl Hover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insertion_point(&self) -> Option<usize> {
        self.insertion_point
    }

    pub fn page(&self) -> Option<&PageId> {
        self.page.as_ref()
    }

    pub fn is_page_hovered(&self, id: &PageId) -> bool {
        self.page.as_ref() == Some(id)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::InsertionPointHovered(index) => {
                self.insertion_point = index;
            }
            Message::PageHovered(id) => {
                self.page = id;
            }
            Message::Cleared => {
                self.insertion_point = None;
                self.page = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hover_targets_are_independent() {
        let mut hover = Hover::new();
        hover.update(Message::InsertionPointHovered(Some(2)));
        hover.update(Message::PageHovered(Some(PageId::new("3"))));
        assert_eq!(hover.insertion_point(), Some(2));
        assert!(hover.is_page_hovered(&PageId::new("3")));

        hover.update(Message::PageHovered(None));
        assert_eq!(hover.insertion_point(), Some(2));
        assert_eq!(hover.page(), None);
    }

    #[test]
    fn test_cleared() {
        let mut hover = Hover::new();
        hover.update(Message::InsertionPointHovered(Some(0)));
        hover.update(Message::PageHovered(Some(PageId::new("1"))));
        hover.update(Message::Cleared);
        assert_eq!(hover, Hover::default());
    }
}
