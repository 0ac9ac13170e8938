//! Per-page context menu
//!
//! Only one menu is open at a time. Choosing an item closes the menu; the
//! items themselves have no effect on the pages.

use crate::domain::{page::PageId, ui::MenuItem};

pub enum Message {
    Opened(PageId),
    Closed,
    PreviousItemHighlighted,
    NextItemHighlighted,
    ItemChosen(MenuItem),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    open_for: Option<PageId>,
    highlighted: usize,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open_for.is_some()
    }

    pub fn open_for(&self) -> Option<&PageId> {
        self.open_for.as_ref()
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted_item(&self) -> Option<MenuItem> {
        MenuItem::all().get(self.highlighted).copied()
    }

    pub fn update(&mut self, message: Message) {
        let last = MenuItem::all().len().saturating_sub(1);
        match message {
            Message::Opened(id) => {
                self.open_for = Some(id);
                self.highlighted = 0;
            }
            Message::Closed | Message::ItemChosen(_) => {
                self.open_for = None;
                self.highlighted = 0;
            }
            Message::PreviousItemHighlighted => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            Message::NextItemHighlighted => {
                self.highlighted = (self.highlighted + 1).min(last);
            }
        }
    }
}
