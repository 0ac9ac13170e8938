use serde::{Deserialize, Serialize};

use crate::domain::{
    page::PageId,
    ui::{Direction, MenuItem},
};

/// Page navigation messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMsg {
    // Page list operations
    SetActive(PageId),
    SelectNeighbor(Direction),
    InsertAfter(usize),
    InsertAfterActive,
    AppendAtEnd,
    Reorder {
        source: usize,
        destination: Option<usize>,
    },
    ShiftActive(Direction),

    // Hover tracking
    HoverInsertionPoint(Option<usize>),
    HoverPage(Option<PageId>),
    ClearHover,

    // Drag gesture
    PressPage {
        id: PageId,
        column: u16,
        row: u16,
    },
    StartDrag(PageId),
    UpdateDragTarget(Option<usize>),
    ReleasePointer,
    CancelDrag,

    // Context menu
    OpenMenu(PageId),
    OpenMenuForActive,
    CloseMenu,
    HighlightPreviousMenuItem,
    HighlightNextMenuItem,
    ChooseMenuItem(MenuItem),
    ChooseHighlightedMenuItem,
}

impl NavigationMsg {
    /// Pointer motion produces these on nearly every mouse event
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            NavigationMsg::HoverInsertionPoint(_)
                | NavigationMsg::HoverPage(_)
                | NavigationMsg::ClearHover
                | NavigationMsg::UpdateDragTarget(_)
        )
    }
}
