//! Page navigation model
//!
//! This module follows the Elm Architecture pattern and acts as a parent component
//! that coordinates its children (Hover, DragGesture and ContextMenu) around the
//! ordered page list.
//!
//! Design decisions:
//! - The page list and the active page id live here; children only hold
//!   transient pointer state
//! - Dropping a drag is a coordination step: the gesture knows the held page
//!   and the target slot, only the parent can turn that into a reorder
//! - All operations are total; out-of-range indices are clamped

use crate::domain::{
    collections::{insert_after, move_item},
    page::{Page, PageId, PageIdGenerator},
    ui::{Direction, MenuItem},
};

pub mod context_menu;
pub mod drag;
pub mod hover;

use context_menu::{ContextMenu, Message as MenuMessage};
use drag::{DragGesture, Message as DragMessage};
use hover::{Hover, Message as HoverMessage};

/// Messages that can be sent to update the page navigation
///
/// Following Elm conventions, messages are named in past tense.
pub enum Message {
    // Page list
    /// A page was clicked or otherwise chosen
    PageActivated(PageId),
    /// The page left or right of the active one was chosen
    NeighborActivated(Direction),
    /// The insert button after page `i` was clicked
    PageInsertedAfter(usize),
    /// The "Add page" button was clicked
    PageAppended,
    /// A page was dropped onto a slot (None when the drop had no target)
    PageMoved {
        source: usize,
        destination: Option<usize>,
    },
    /// The active page was shifted one slot with the keyboard
    ActivePageShifted(Direction),

    // Hover (delegated to Hover)
    InsertionPointHovered(Option<usize>),
    PageHovered(Option<PageId>),
    HoverCleared,

    // Drag gesture (coordinated with the page list)
    PagePressed { id: PageId, column: u16, row: u16 },
    DragStarted(PageId),
    DragTargetChanged(Option<usize>),
    /// The button was released; a held page is dropped on the current target
    PointerReleased,
    DragCancelled,

    // Context menu (delegated to ContextMenu)
    MenuOpened(PageId),
    MenuClosed,
    PreviousMenuItemHighlighted,
    NextMenuItemHighlighted,
    MenuItemChosen(MenuItem),
}

/// What a released pointer turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    /// Press and release on the same page without moving
    Click(PageId),
    /// A drag that ended on a slot, or off every slot when `destination` is None
    Drop {
        id: PageId,
        source: usize,
        destination: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigation {
    pages: Vec<Page>,
    active: PageId,
    ids: PageIdGenerator,
    hover: Hover,
    drag: DragGesture,
    menu: ContextMenu,
}

impl PageNavigation {
    /// Builds a navigation over `pages` with the first one active
    ///
    /// The id counter starts past every numeric id in `pages`.
    pub fn new(pages: Vec<Page>) -> Self {
        let next = pages
            .iter()
            .filter_map(|page| page.id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        let active = pages
            .first()
            .map(|page| page.id.clone())
            .unwrap_or_else(|| PageId::new(""));
        Self {
            pages,
            active,
            ids: PageIdGenerator::starting_at(next),
            hover: Hover::new(),
            drag: DragGesture::default(),
            menu: ContextMenu::new(),
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn position(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|page| &page.id == id)
    }

    pub fn active_id(&self) -> &PageId {
        &self.active
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.position(&self.active).map(|index| &self.pages[index])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.position(&self.active)
    }

    pub fn is_active(&self, id: &PageId) -> bool {
        &self.active == id
    }

    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    /// Page names in display order, joined by arrows
    pub fn page_order(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    pub fn hover(&self) -> &Hover {
        &self.hover
    }

    pub fn drag(&self) -> &DragGesture {
        &self.drag
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn is_dragged(&self, id: &PageId) -> bool {
        self.drag.dragged_page() == Some(id)
    }

    /// The "+" of connector `i` only shows while that connector is hovered
    pub fn is_insert_button_visible(&self, index: usize) -> bool {
        self.hover.insertion_point() == Some(index)
    }

    /// The "⋯" trigger shows on the hovered page and on the active page
    pub fn is_menu_trigger_visible(&self, id: &PageId) -> bool {
        self.hover.is_page_hovered(id) || self.is_active(id)
    }

    /// Removes the page at `source` and reinserts it at `destination`.
    ///
    /// Without a destination the list is left untouched.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) {
        if let Some(destination) = destination {
            move_item(&mut self.pages, source, destination);
        }
    }

    /// Mints a page, puts it right after `index` and makes it active
    pub fn insert_after(&mut self, index: usize) -> PageId {
        let page = self.ids.mint();
        let id = page.id.clone();
        insert_after(&mut self.pages, index, page);
        self.active = id.clone();
        id
    }

    /// Mints a page at the tail and makes it active
    pub fn append_at_end(&mut self) -> PageId {
        let page = self.ids.mint();
        let id = page.id.clone();
        self.pages.push(page);
        self.active = id.clone();
        id
    }

    /// Makes `id` the active page. The id is not checked against the list.
    pub fn set_active(&mut self, id: PageId) {
        self.active = id;
    }

    /// Interprets the end of a press on a page
    pub fn release(&self) -> Option<Release> {
        match &self.drag {
            DragGesture::Idle => None,
            DragGesture::Pressed { page, .. } => Some(Release::Click(page.clone())),
            DragGesture::Dragging { page, target } => {
                self.position(page).map(|source| Release::Drop {
                    id: page.clone(),
                    source,
                    destination: *target,
                })
            }
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PageActivated(id) => self.set_active(id),
            Message::NeighborActivated(direction) => {
                let Some(index) = self.active_index() else {
                    if let Some(first) = self.pages.first() {
                        self.active = first.id.clone();
                    }
                    return;
                };
                let neighbor = match direction {
                    Direction::Left => index.checked_sub(1),
                    Direction::Right => Some(index + 1).filter(|&i| i < self.pages.len()),
                };
                if let Some(neighbor) = neighbor {
                    self.active = self.pages[neighbor].id.clone();
                }
            }
            Message::PageInsertedAfter(index) => {
                self.insert_after(index);
            }
            Message::PageAppended => {
                self.append_at_end();
            }
            Message::PageMoved {
                source,
                destination,
            } => self.reorder(source, destination),
            Message::ActivePageShifted(direction) => {
                if let Some(index) = self.active_index() {
                    let destination = match direction {
                        Direction::Left => index.checked_sub(1),
                        Direction::Right => Some(index + 1).filter(|&i| i < self.pages.len()),
                    };
                    self.reorder(index, destination);
                }
            }

            Message::InsertionPointHovered(index) => {
                self.hover.update(HoverMessage::InsertionPointHovered(index))
            }
            Message::PageHovered(id) => self.hover.update(HoverMessage::PageHovered(id)),
            Message::HoverCleared => self.hover.update(HoverMessage::Cleared),

            Message::PagePressed { id, column, row } => self.drag.update(DragMessage::Pressed {
                page: id,
                column,
                row,
            }),
            Message::DragStarted(id) => {
                // A drag hides the hover affordances until the drop
                self.hover.update(HoverMessage::Cleared);
                self.drag.update(DragMessage::Started(id));
            }
            Message::DragTargetChanged(target) => {
                let target = target.map(|t| t.min(self.pages.len().saturating_sub(1)));
                self.drag.update(DragMessage::TargetChanged(target));
            }
            Message::PointerReleased => {
                match self.release() {
                    Some(Release::Click(id)) => self.set_active(id),
                    Some(Release::Drop {
                        source,
                        destination,
                        ..
                    }) => self.reorder(source, destination),
                    None => {}
                }
                self.drag.update(DragMessage::Finished);
            }
            Message::DragCancelled => self.drag.update(DragMessage::Finished),

            Message::MenuOpened(id) => self.menu.update(MenuMessage::Opened(id)),
            Message::MenuClosed => self.menu.update(MenuMessage::Closed),
            Message::PreviousMenuItemHighlighted => {
                self.menu.update(MenuMessage::PreviousItemHighlighted)
            }
            Message::NextMenuItemHighlighted => self.menu.update(MenuMessage::NextItemHighlighted),
            Message::MenuItemChosen(item) => self.menu.update(MenuMessage::ItemChosen(item)),
        }
    }
}

impl Default for PageNavigation {
    fn default() -> Self {
        Self::new(Page::seed())
    }
}
