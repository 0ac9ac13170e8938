//! Drag gesture state machine
//!
//! `Idle -> Pressed -> Dragging -> Idle`. `Pressed` only tells a click apart
//! from the start of a drag; a press released without moving is a click.
//! The gesture tracks page ids, never indices, so the source slot is looked
//! up at drop time.

use crate::domain::page::PageId;

/// Messages that can be sent to update the drag gesture
pub enum Message {
    /// The primary button went down on a page
    Pressed { page: PageId, column: u16, row: u16 },
    /// The pressed page started moving
    Started(PageId),
    /// The slot under the pointer changed; None when outside every drop target
    TargetChanged(Option<usize>),
    /// The gesture ended, with or without a drop
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragGesture {
    #[default]
    Idle,
    Pressed {
        page: PageId,
        column: u16,
        row: u16,
    },
    Dragging {
        page: PageId,
        target: Option<usize>,
    },
}

impl DragGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragGesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Page currently held by the pointer, pressed or dragged
    pub fn held_page(&self) -> Option<&PageId> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Pressed { page, .. } | DragGesture::Dragging { page, .. } => Some(page),
        }
    }

    pub fn dragged_page(&self) -> Option<&PageId> {
        match self {
            DragGesture::Dragging { page, .. } => Some(page),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            DragGesture::Dragging { target, .. } => *target,
            _ => None,
        }
    }

    /// Whether the pointer left the cell it was pressed on
    pub fn has_moved(&self, column: u16, row: u16) -> bool {
        match self {
            DragGesture::Pressed {
                column: c, row: r, ..
            } => *c != column || *r != row,
            _ => false,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Pressed { page, column, row } => {
                *self = DragGesture::Pressed { page, column, row };
            }
            Message::Started(page) => {
                *self = DragGesture::Dragging { page, target: None };
            }
            Message::TargetChanged(index) => {
                if let DragGesture::Dragging { target, .. } = self {
                    *target = index;
                }
            }
            Message::Finished => {
                *self = DragGesture::Idle;
            }
        }
    }
}
