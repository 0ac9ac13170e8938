use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Entries of the per-page context menu.
///
/// These are affordances only; choosing one does not change the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum MenuItem {
    #[strum(to_string = "Set as first page")]
    SetAsFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

impl MenuItem {
    pub fn all() -> Vec<MenuItem> {
        MenuItem::iter().collect()
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MenuItem::SetAsFirst => "⚑",
            MenuItem::Rename => "✎",
            MenuItem::Copy => "⧉",
            MenuItem::Duplicate => "❐",
            MenuItem::Delete => "✗",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, MenuItem::Delete)
    }

    /// Destructive items are set apart by a separator line
    pub fn has_separator_before(&self) -> bool {
        self.is_destructive()
    }
}

/// Which direction a keyboard move shifts a page or the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}
