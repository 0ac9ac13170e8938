//! Screen geometry shared by rendering and mouse hit-testing
//!
//! Everything here is a pure function of the terminal area and the
//! navigation state, so the translator can recompute exactly what the
//! renderer drew and map pointer coordinates back to targets.

use ratatui::{
    layout::{Constraint, Layout, Position},
    prelude::Rect,
    widgets::{Block, Padding},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{page::PageId, ui::MenuItem},
    model::page_navigation::PageNavigation,
};

/// Height of a page tab: border, content, border
pub const TAB_HEIGHT: u16 = 3;
/// Width of the dashed gap between two tabs
pub const CONNECTOR_WIDTH: u16 = 3;
pub const ADD_BUTTON_LABEL: &str = "+ Add page";
pub const PAGE_SHELL_TITLE: &str = "Form Builder - Page Navigation";
/// Rows of the "Current State" panel, heading included
pub const STATE_PANEL_HEIGHT: u16 = 4;

/// Left border, icon, space: the cells before the page name
const TAB_LEAD: u16 = 3;
/// Space, menu trigger, right border: the cells after the name
const TAB_TAIL: u16 = 3;

/// Areas of the page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub title: Rect,
    pub container: Rect,
    pub strip: Rect,
    pub panel: Rect,
    pub status: Rect,
}

impl ShellLayout {
    pub fn new(area: Rect) -> Self {
        let [title, _, container, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let inner = Self::container_block().inner(container);
        let [strip, _, panel] = Layout::vertical([
            Constraint::Length(TAB_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(STATE_PANEL_HEIGHT),
        ])
        .areas(inner);

        Self {
            title,
            container,
            strip,
            panel,
            status,
        }
    }

    /// The bordered container the strip lives in
    pub fn container_block<'a>() -> Block<'a> {
        Block::bordered().padding(Padding::horizontal(1))
    }
}

/// Where a page tab was laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSlot {
    pub index: usize,
    pub id: PageId,
    /// Visible part of the tab
    pub area: Rect,
    /// Whole tab in strip coordinates, before scrolling
    pub full: Rect,
    /// The "⋯" cell, when it is on screen
    pub trigger: Option<Rect>,
    /// The tab is cut by the left or right edge of the strip
    pub clipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorSlot {
    /// Index of the page on the left of the connector
    pub after: usize,
    pub area: Rect,
    pub full: Rect,
}

/// A strip element that is not tied to a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub area: Rect,
    pub full: Rect,
}

/// What sits under a pointer position inside the strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripHit {
    MenuTrigger { index: usize, id: PageId },
    Page { index: usize, id: PageId },
    Connector(usize),
    TrailingConnector,
    AddButton,
}

/// Horizontal layout of tabs, connectors and the "Add page" button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripLayout {
    pub tabs: Vec<TabSlot>,
    pub connectors: Vec<ConnectorSlot>,
    pub trailing: Option<Placed>,
    pub add_button: Option<Placed>,
    /// Columns of the first kept segment scrolled off the left edge
    pub offset: u16,
    /// Width spanned by the kept segments
    pub total_width: u16,
}

enum Segment {
    Tab(usize),
    Connector(usize),
    Trailing,
    AddButton,
}

pub fn tab_width(name: &str) -> u16 {
    let name = u16::try_from(name.width()).unwrap_or(u16::MAX);
    TAB_LEAD.saturating_add(name).saturating_add(TAB_TAIL)
}

pub fn add_button_width() -> u16 {
    // Dashed border on both sides
    u16::try_from(ADD_BUTTON_LABEL.width()).unwrap_or(u16::MAX) + 2
}

impl StripLayout {
    /// Lays the pages out left to right, scrolled so the active page is visible
    ///
    /// Positions are tracked in `u32` so a strip longer than `u16::MAX`
    /// columns still scrolls. Only segments touching the window are kept,
    /// and their `full` rects start at the first of them.
    pub fn compute(nav: &PageNavigation, area: Rect) -> Self {
        let mut segments: Vec<(Segment, u32, u16)> = Vec::with_capacity(nav.len() * 2 + 2);
        let mut x: u32 = 0;
        for (index, page) in nav.pages().iter().enumerate() {
            let width = tab_width(&page.name);
            segments.push((Segment::Tab(index), x, width));
            x += u32::from(width);
            if index + 1 < nav.len() {
                segments.push((Segment::Connector(index), x, CONNECTOR_WIDTH));
                x += u32::from(CONNECTOR_WIDTH);
            }
        }
        segments.push((Segment::Trailing, x, CONNECTOR_WIDTH));
        x += u32::from(CONNECTOR_WIDTH);
        segments.push((Segment::AddButton, x, add_button_width()));

        let view_width = u32::from(area.width);
        let active_end = nav.active_index().and_then(|active| {
            segments.iter().find_map(|(segment, x, width)| match segment {
                Segment::Tab(index) if *index == active => Some(x + u32::from(*width)),
                _ => None,
            })
        });
        let scroll = match active_end {
            Some(end) if end > view_width => end - view_width,
            _ => 0,
        };
        let window_end = scroll + view_width;

        let kept: Vec<_> = segments
            .into_iter()
            .filter(|(_, x, width)| *x < window_end && x + u32::from(*width) > scroll)
            .collect();
        let origin = kept.first().map_or(scroll, |(_, x, _)| *x);
        let to_strip = |x: u32| u16::try_from(x - origin).unwrap_or(u16::MAX);

        let height = area.height.min(TAB_HEIGHT);
        let mut layout = StripLayout {
            offset: to_strip(scroll),
            total_width: kept
                .last()
                .map_or(0, |(_, x, width)| to_strip(x + u32::from(*width))),
            ..Default::default()
        };
        for (segment, x, width) in kept {
            let x = to_strip(x);
            let Some(visible) = project(area, layout.offset, x, width) else {
                continue;
            };
            let full = Rect::new(x, 0, width, height);
            match segment {
                Segment::Tab(index) => {
                    let trigger_x = x.saturating_add(width).saturating_sub(2);
                    let trigger = if area.height >= 2 {
                        project(area, layout.offset, trigger_x, 1).map(|r| Rect {
                            y: r.y + 1,
                            height: 1,
                            ..r
                        })
                    } else {
                        None
                    };
                    layout.tabs.push(TabSlot {
                        index,
                        id: nav.pages()[index].id.clone(),
                        area: visible,
                        full,
                        trigger,
                        clipped: visible.width < width,
                    });
                }
                Segment::Connector(after) => layout.connectors.push(ConnectorSlot {
                    after,
                    area: visible,
                    full,
                }),
                Segment::Trailing => {
                    layout.trailing = Some(Placed {
                        area: visible,
                        full,
                    })
                }
                Segment::AddButton => {
                    layout.add_button = Some(Placed {
                        area: visible,
                        full,
                    })
                }
            }
        }
        layout
    }

    pub fn tab(&self, id: &PageId) -> Option<&TabSlot> {
        self.tabs.iter().find(|slot| &slot.id == id)
    }

    pub fn connector(&self, after: usize) -> Option<&ConnectorSlot> {
        self.connectors.iter().find(|slot| slot.after == after)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<StripHit> {
        let position = Position::new(column, row);
        for slot in &self.tabs {
            if slot.trigger.is_some_and(|r| r.contains(position)) {
                return Some(StripHit::MenuTrigger {
                    index: slot.index,
                    id: slot.id.clone(),
                });
            }
            if slot.area.contains(position) {
                return Some(StripHit::Page {
                    index: slot.index,
                    id: slot.id.clone(),
                });
            }
        }
        if let Some(slot) = self.connectors.iter().find(|c| c.area.contains(position)) {
            return Some(StripHit::Connector(slot.after));
        }
        if self.trailing.is_some_and(|p| p.area.contains(position)) {
            return Some(StripHit::TrailingConnector);
        }
        if self.add_button.is_some_and(|p| p.area.contains(position)) {
            return Some(StripHit::AddButton);
        }
        None
    }
}

/// Maps the virtual span `[x, x + width)` onto the visible window of `area`
fn project(area: Rect, offset: u16, x: u16, width: u16) -> Option<Rect> {
    let start = x.max(offset);
    let end = x.saturating_add(width).min(offset.saturating_add(area.width));
    if start >= end || area.height == 0 {
        return None;
    }
    Some(Rect {
        x: area.x + (start - offset),
        y: area.y,
        width: end - start,
        height: area.height.min(TAB_HEIGHT),
    })
}

/// Popup geometry of an open context menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub area: Rect,
    pub items: Vec<(MenuItem, Rect)>,
    pub separators: Vec<Rect>,
}

pub const MENU_WIDTH: u16 = 24;

impl MenuLayout {
    pub fn height() -> u16 {
        let items = MenuItem::all();
        let separators = items.iter().filter(|i| i.has_separator_before()).count();
        u16::try_from(items.len() + separators).unwrap_or(u16::MAX) + 2
    }

    /// Places the menu right under `anchor`, kept inside `bounds`
    pub fn anchored(anchor: Rect, bounds: Rect) -> Self {
        let width = MENU_WIDTH.min(bounds.width);
        let height = Self::height().min(bounds.height);
        let x = anchor
            .x
            .min(bounds.right().saturating_sub(width))
            .max(bounds.x);
        let below = anchor.y.saturating_add(2);
        let y = if below.saturating_add(height) <= bounds.bottom() {
            below
        } else {
            bounds.bottom().saturating_sub(height).max(bounds.y)
        };
        let area = Rect::new(x, y, width, height);

        let mut items = Vec::new();
        let mut separators = Vec::new();
        let mut row = area.y + 1;
        for item in MenuItem::all() {
            if item.has_separator_before() {
                separators.push(Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1));
                row += 1;
            }
            let rect = Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1);
            if rect.bottom() < area.bottom() {
                items.push((item, rect));
            }
            row += 1;
        }
        Self {
            area,
            items,
            separators,
        }
    }

    /// Geometry of the menu currently open in `nav`, if any
    pub fn for_navigation(
        nav: &PageNavigation,
        strip: &StripLayout,
        shell: &ShellLayout,
        bounds: Rect,
    ) -> Option<Self> {
        let id = nav.menu().open_for()?;
        let anchor = strip
            .tab(id)
            .map(|slot| {
                slot.trigger.unwrap_or(Rect {
                    y: slot.area.y + 1,
                    height: 1,
                    ..slot.area
                })
            })
            .unwrap_or(Rect {
                y: shell.strip.y + 1,
                height: 1,
                ..shell.strip
            });
        Some(Self::anchored(anchor, bounds))
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn item_at(&self, column: u16, row: u16) -> Option<MenuItem> {
        let position = Position::new(column, row);
        self.items
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(item, _)| *item)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::model::page_navigation::Message;

    #[fixture]
    fn nav() -> PageNavigation {
        PageNavigation::default()
    }

    #[fixture]
    fn wide() -> Rect {
        Rect::new(2, 5, 200, 3)
    }

    #[test]
    fn test_tab_width() {
        assert_eq!(tab_width("Info"), 10);
        assert_eq!(tab_width(""), 6);
    }

    #[rstest]
    fn test_strip_lays_out_left_to_right(nav: PageNavigation, wide: Rect) {
        let layout = StripLayout::compute(&nav, wide);

        assert_eq!(layout.offset, 0);
        assert_eq!(layout.tabs.len(), 4);
        assert_eq!(layout.connectors.len(), 3);
        // Info(10) then connector(3)
        assert_eq!(layout.tabs[0].area, Rect::new(2, 5, 10, 3));
        assert_eq!(layout.connectors[0].area, Rect::new(12, 5, 3, 3));
        assert_eq!(layout.tabs[1].area.x, 15);
        assert_eq!(layout.tabs[0].trigger, Some(Rect::new(10, 6, 1, 1)));
        assert!(layout.trailing.is_some());
        assert!(layout.add_button.is_some());
    }

    #[rstest]
    fn test_hit_testing(nav: PageNavigation, wide: Rect) {
        let layout = StripLayout::compute(&nav, wide);

        assert_eq!(
            layout.hit(3, 5),
            Some(StripHit::Page {
                index: 0,
                id: PageId::new("1")
            })
        );
        assert_eq!(
            layout.hit(10, 6),
            Some(StripHit::MenuTrigger {
                index: 0,
                id: PageId::new("1")
            })
        );
        assert_eq!(layout.hit(13, 6), Some(StripHit::Connector(0)));
        let add = layout.add_button.unwrap().area;
        assert_eq!(layout.hit(add.x, add.y), Some(StripHit::AddButton));
        assert_eq!(layout.hit(1, 5), None);
        assert_eq!(layout.hit(3, 8), None);
    }

    #[rstest]
    fn test_scrolls_to_keep_active_page_visible(mut nav: PageNavigation) {
        for _ in 0..6 {
            nav.update(Message::PageAppended);
        }
        let area = Rect::new(0, 0, 40, 3);
        let layout = StripLayout::compute(&nav, area);

        assert!(layout.offset > 0);
        let active = layout.tab(nav.active_id()).unwrap();
        assert!(!active.clipped);
        assert_eq!(active.area.right(), 40);
        assert!(layout.tab(&PageId::new("1")).is_none());
    }

    #[rstest]
    fn test_strip_longer_than_u16_columns(mut nav: PageNavigation) {
        for _ in 0..7000 {
            nav.append_at_end();
        }
        let area = Rect::new(2, 3, 76, 3);
        let layout = StripLayout::compute(&nav, area);

        let active = layout.tab(nav.active_id()).unwrap();
        assert_eq!(active.index, 7003);
        assert!(!active.clipped);
        assert_eq!(active.area.right(), area.right());
        assert!(layout.total_width < 200);
        assert!(layout.tabs.iter().all(|slot| slot.index > 6990));
        assert_eq!(
            layout.hit(active.area.x + 1, 4),
            Some(StripHit::Page {
                index: 7003,
                id: nav.active_id().clone()
            })
        );
    }

    #[rstest]
    fn test_narrow_strip_clips_tabs(nav: PageNavigation) {
        let layout = StripLayout::compute(&nav, Rect::new(0, 0, 20, 3));
        assert_eq!(layout.tabs.len(), 2);
        assert!(!layout.tabs[0].clipped);
        assert!(layout.tabs[1].clipped);
        assert!(layout.add_button.is_none());
    }

    #[test]
    fn test_menu_items_are_stacked_with_separator() {
        let bounds = Rect::new(0, 0, 80, 24);
        let menu = MenuLayout::anchored(Rect::new(10, 6, 1, 1), bounds);

        assert_eq!(menu.area, Rect::new(10, 8, MENU_WIDTH, 8));
        assert_eq!(menu.items.len(), 5);
        assert_eq!(menu.item_at(11, 9), Some(MenuItem::SetAsFirst));
        assert_eq!(menu.item_at(11, 12), Some(MenuItem::Duplicate));
        assert_eq!(menu.item_at(11, 13), None);
        assert_eq!(menu.item_at(11, 14), Some(MenuItem::Delete));
        assert_eq!(menu.separators, vec![Rect::new(11, 13, MENU_WIDTH - 2, 1)]);
        assert!(menu.contains(10, 8));
        assert!(!menu.contains(9, 8));
    }

    #[test]
    fn test_menu_stays_inside_bounds() {
        let bounds = Rect::new(0, 0, 30, 12);
        let menu = MenuLayout::anchored(Rect::new(28, 6, 1, 1), bounds);
        assert!(menu.area.right() <= bounds.right());
        assert!(menu.area.bottom() <= bounds.bottom());
    }

    #[rstest]
    fn test_seeded_strip_fits_a_standard_terminal(nav: PageNavigation) {
        let shell = ShellLayout::new(Rect::new(0, 0, 80, 24));
        let layout = StripLayout::compute(&nav, shell.strip);
        assert!(layout.tabs.iter().all(|slot| !slot.clipped));
        assert_eq!(layout.total_width, 70);
        assert_eq!(
            layout.add_button.map(|p| p.area),
            Some(Rect::new(60, 3, 12, 3))
        );
        assert_eq!(layout.add_button.map(|p| p.full), Some(Rect::new(58, 0, 12, 3)));
    }

    #[test]
    fn test_shell_layout() {
        let shell = ShellLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(shell.title, Rect::new(0, 0, 80, 1));
        assert_eq!(shell.container, Rect::new(0, 2, 80, 21));
        // Border + horizontal padding
        assert_eq!(shell.strip, Rect::new(2, 3, 76, TAB_HEIGHT));
        assert_eq!(shell.panel.y, 7);
        assert_eq!(shell.status, Rect::new(0, 23, 80, 1));
    }
}
