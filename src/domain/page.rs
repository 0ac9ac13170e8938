use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Stable identifier of a form page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for PageId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Icon shown in front of a page name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PageIcon {
    Circle,
    #[default]
    Document,
    CircleCheck,
}

impl PageIcon {
    /// Terminal glyph for the icon. Active pages get the filled variant.
    pub fn glyph(&self, is_active: bool) -> &'static str {
        match (self, is_active) {
            (PageIcon::Circle, false) => "○",
            (PageIcon::Circle, true) => "●",
            (PageIcon::CircleCheck, false) => "○",
            (PageIcon::CircleCheck, true) => "◉",
            (PageIcon::Document, _) => "≡",
        }
    }
}

/// A single step of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub icon: PageIcon,
}

impl Page {
    pub fn new(id: impl Into<PageId>, name: impl Into<String>, icon: PageIcon) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon,
        }
    }

    /// The four pages every form starts with
    pub fn seed() -> Vec<Page> {
        vec![
            Page::new("1", "Info", PageIcon::Circle),
            Page::new("2", "Details", PageIcon::Document),
            Page::new("3", "Other", PageIcon::Document),
            Page::new("4", "Ending", PageIcon::CircleCheck),
        ]
    }
}

/// Mints page ids from a counter that only ever goes up.
///
/// The counter is independent of the list length, so ids stay unique after
/// reorders and would stay unique after deletions too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdGenerator {
    next: u64,
}

impl PageIdGenerator {
    /// First id handed out after the seeded pages
    pub const SEED_NEXT: u64 = 5;

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Creates a fresh page named after its counter value
    pub fn mint(&mut self) -> Page {
        let n = self.next;
        self.next += 1;
        Page::new(n, format!("Page {n}"), PageIcon::Document)
    }
}

impl Default for PageIdGenerator {
    fn default() -> Self {
        Self::starting_at(Self::SEED_NEXT)
    }
}
