use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{navigation::NavigationMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{page::PageId, ui::Direction},
    model::page_navigation::{drag::DragGesture, PageNavigation},
    presentation::{
        config::keybindings::Action,
        layout::{MenuLayout, ShellLayout, StripHit, StripLayout},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn nav(msg: NavigationMsg) -> Msg {
    Msg::Navigation(msg)
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if state.navigation.menu().is_open() {
        if let Some(msgs) = translate_menu_keys(key) {
            return msgs;
        }
    }

    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![],
    }
}

/// Fixed keys while a context menu is open
fn translate_menu_keys(key: KeyEvent) -> Option<Vec<Msg>> {
    let msg = match key.code {
        KeyCode::Up => NavigationMsg::HighlightPreviousMenuItem,
        KeyCode::Down => NavigationMsg::HighlightNextMenuItem,
        KeyCode::Enter => NavigationMsg::ChooseHighlightedMenuItem,
        KeyCode::Esc => NavigationMsg::CloseMenu,
        _ => return None,
    };
    Some(vec![nav(msg)])
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::SelectPrevious => vec![nav(NavigationMsg::SelectNeighbor(Direction::Left))],
        Action::SelectNext => vec![nav(NavigationMsg::SelectNeighbor(Direction::Right))],
        Action::MovePageLeft => vec![nav(NavigationMsg::ShiftActive(Direction::Left))],
        Action::MovePageRight => vec![nav(NavigationMsg::ShiftActive(Direction::Right))],
        Action::InsertPage => vec![nav(NavigationMsg::InsertAfterActive)],
        Action::AppendPage => vec![nav(NavigationMsg::AppendAtEnd)],
        Action::OpenMenu => vec![nav(NavigationMsg::OpenMenuForActive)],
        Action::Cancel => translate_cancel(state),
    }
}

/// Esc peels off one layer: menu, then drag, then the status line
fn translate_cancel(state: &AppState) -> Vec<Msg> {
    let navigation = &state.navigation;
    if navigation.menu().is_open() {
        vec![nav(NavigationMsg::CloseMenu)]
    } else if !navigation.drag().is_idle() {
        vec![nav(NavigationMsg::CancelDrag)]
    } else if state.system.status_message.is_some() {
        vec![Msg::System(SystemMsg::ClearStatusMessage)]
    } else {
        vec![]
    }
}

/// Layout of the current frame, recomputed from the stored viewport
struct Frame {
    strip: StripLayout,
    menu: Option<MenuLayout>,
}

impl Frame {
    fn of(state: &AppState) -> Self {
        let viewport = state.system.viewport();
        let shell = ShellLayout::new(viewport);
        let strip = StripLayout::compute(&state.navigation, shell.strip);
        let menu = MenuLayout::for_navigation(&state.navigation, &strip, &shell, viewport);
        Self { strip, menu }
    }
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let frame = Frame::of(state);
    let (column, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => translate_left_press(&frame, state, column, row),
        MouseEventKind::Down(MouseButton::Right) => {
            if frame.menu.is_some() {
                return vec![nav(NavigationMsg::CloseMenu)];
            }
            match frame.strip.hit(column, row) {
                Some(StripHit::Page { id, .. } | StripHit::MenuTrigger { id, .. }) => {
                    vec![nav(NavigationMsg::OpenMenu(id))]
                }
                _ => vec![],
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => translate_drag(&frame, state, column, row),
        MouseEventKind::Up(MouseButton::Left) => {
            if state.navigation.drag().is_idle() {
                vec![]
            } else {
                vec![nav(NavigationMsg::ReleasePointer)]
            }
        }
        MouseEventKind::Moved => translate_motion(&frame, state, column, row),
        _ => vec![],
    }
}

fn translate_left_press(frame: &Frame, state: &AppState, column: u16, row: u16) -> Vec<Msg> {
    let navigation = &state.navigation;

    if let Some(menu) = &frame.menu {
        if !menu.contains(column, row) {
            return vec![nav(NavigationMsg::CloseMenu)];
        }
        return menu
            .item_at(column, row)
            .map(|item| vec![nav(NavigationMsg::ChooseMenuItem(item))])
            .unwrap_or_default();
    }

    match frame.strip.hit(column, row) {
        Some(StripHit::MenuTrigger { id, .. }) if navigation.is_menu_trigger_visible(&id) => {
            vec![nav(NavigationMsg::OpenMenu(id))]
        }
        Some(StripHit::MenuTrigger { id, .. } | StripHit::Page { id, .. }) => {
            vec![nav(NavigationMsg::PressPage { id, column, row })]
        }
        Some(StripHit::Connector(index)) => {
            let mut msgs = Vec::with_capacity(2);
            // Terminals without motion reporting never showed the "+" yet
            if !navigation.is_insert_button_visible(index) {
                msgs.push(nav(NavigationMsg::HoverInsertionPoint(Some(index))));
            }
            msgs.push(nav(NavigationMsg::InsertAfter(index)));
            msgs
        }
        Some(StripHit::AddButton) => vec![nav(NavigationMsg::AppendAtEnd)],
        Some(StripHit::TrailingConnector) | None => vec![],
    }
}

fn translate_drag(frame: &Frame, state: &AppState, column: u16, row: u16) -> Vec<Msg> {
    let navigation = &state.navigation;
    match navigation.drag() {
        DragGesture::Idle => vec![],
        DragGesture::Pressed { page, .. } => {
            if !navigation.drag().has_moved(column, row) {
                return vec![];
            }
            let target = drop_target(navigation, page, frame.strip.hit(column, row));
            vec![
                nav(NavigationMsg::StartDrag(page.clone())),
                nav(NavigationMsg::UpdateDragTarget(target)),
            ]
        }
        DragGesture::Dragging { page, target } => {
            let next = drop_target(navigation, page, frame.strip.hit(column, row));
            if next == *target {
                vec![]
            } else {
                vec![nav(NavigationMsg::UpdateDragTarget(next))]
            }
        }
    }
}

/// Index the held page would land on if released over `hit`
///
/// A connector sits between two pages; dropping there puts the page between
/// them, whichever side it came from.
fn drop_target(navigation: &PageNavigation, held: &PageId, hit: Option<StripHit>) -> Option<usize> {
    let last = navigation.len().checked_sub(1)?;
    let source = navigation.position(held)?;
    match hit? {
        StripHit::Page { index, .. } | StripHit::MenuTrigger { index, .. } => Some(index),
        StripHit::Connector(after) if source <= after => Some(after),
        StripHit::Connector(after) => Some((after + 1).min(last)),
        StripHit::TrailingConnector | StripHit::AddButton => Some(last),
    }
}

fn translate_motion(frame: &Frame, state: &AppState, column: u16, row: u16) -> Vec<Msg> {
    let navigation = &state.navigation;
    if navigation.drag().is_dragging() {
        return vec![];
    }

    let over_menu = frame
        .menu
        .as_ref()
        .is_some_and(|menu| menu.contains(column, row));
    let (insertion_point, page) = match frame.strip.hit(column, row) {
        _ if over_menu => (None, None),
        Some(StripHit::Page { id, .. } | StripHit::MenuTrigger { id, .. }) => (None, Some(id)),
        Some(StripHit::Connector(index)) => (Some(index), None),
        _ => (None, None),
    };

    let hover = navigation.hover();
    if insertion_point.is_none() && page.is_none() {
        if hover.insertion_point().is_some() || hover.page().is_some() {
            return vec![nav(NavigationMsg::ClearHover)];
        }
        return vec![];
    }

    let mut msgs = Vec::new();
    if hover.insertion_point() != insertion_point {
        msgs.push(nav(NavigationMsg::HoverInsertionPoint(insertion_point)));
    }
    if hover.page() != page.as_ref() {
        msgs.push(nav(NavigationMsg::HoverPage(page)));
    }
    msgs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        core::update::update, domain::ui::MenuItem, infrastructure::config::Config,
    };

    // With an 80x24 viewport the strip starts at (2, 3):
    // Info 2..12, Details 15..28, Other 31..42, Ending 45..57, Add page 60..72
    #[fixture]
    fn state() -> AppState {
        let mut state = AppState::new_with_config(Config::new_default().unwrap());
        state.system.update(SystemMsg::Resize(80, 24));
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Feeds raw events through translate + update like the runtime does
    fn feed(mut state: AppState, raws: Vec<RawMsg>) -> AppState {
        for raw in raws {
            for msg in translate_raw_to_domain(raw, &state) {
                state = update(msg, state).0;
            }
        }
        state
    }

    #[rstest]
    fn test_system_events(state: AppState) {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(100, 40), &state),
            vec![Msg::System(SystemMsg::Resize(100, 40))]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }

    #[rstest]
    #[case(KeyCode::Char('q'), vec![Msg::System(SystemMsg::Quit)])]
    #[case(KeyCode::Right, vec![nav(NavigationMsg::SelectNeighbor(Direction::Right))])]
    #[case(KeyCode::Char('h'), vec![nav(NavigationMsg::SelectNeighbor(Direction::Left))])]
    #[case(KeyCode::Char('i'), vec![nav(NavigationMsg::InsertAfterActive)])]
    #[case(KeyCode::Char('a'), vec![nav(NavigationMsg::AppendAtEnd)])]
    #[case(KeyCode::Char('m'), vec![nav(NavigationMsg::OpenMenuForActive)])]
    #[case(KeyCode::Char('x'), vec![])]
    fn test_keybindings(state: AppState, #[case] code: KeyCode, #[case] expected: Vec<Msg>) {
        assert_eq!(translate_raw_to_domain(key(code), &state), expected);
    }

    #[rstest]
    fn test_shift_arrow_moves_page(state: AppState) {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![nav(NavigationMsg::ShiftActive(Direction::Right))]
        );
    }

    #[rstest]
    fn test_ctrl_c_always_quits(state: AppState) {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    fn test_menu_keys_take_precedence(state: AppState) {
        let state = feed(state, vec![key(KeyCode::Char('m'))]);
        assert!(state.navigation.menu().is_open());

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Down), &state),
            vec![nav(NavigationMsg::HighlightNextMenuItem)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![nav(NavigationMsg::ChooseHighlightedMenuItem)]
        );
        let state = feed(state, vec![key(KeyCode::Esc)]);
        assert!(!state.navigation.menu().is_open());
    }

    #[rstest]
    fn test_esc_clears_status_when_nothing_else_is_open(state: AppState) {
        let state = feed(state, vec![key(KeyCode::Char('a'))]);
        assert!(state.system.status_message.is_some());
        let state = feed(state, vec![key(KeyCode::Esc)]);
        assert_eq!(state.system.status_message, None);
    }

    #[rstest]
    fn test_hover_reveals_insert_button_and_trigger(state: AppState) {
        let state = feed(state, vec![mouse(MouseEventKind::Moved, 13, 4)]);
        assert!(state.navigation.is_insert_button_visible(0));
        assert!(!state.navigation.is_insert_button_visible(1));

        let state = feed(state, vec![mouse(MouseEventKind::Moved, 20, 4)]);
        assert!(!state.navigation.is_insert_button_visible(0));
        assert!(state.navigation.is_menu_trigger_visible(&PageId::new("2")));

        let state = feed(state, vec![mouse(MouseEventKind::Moved, 20, 15)]);
        assert_eq!(state.navigation.hover().page(), None);
    }

    #[rstest]
    fn test_motion_without_change_emits_nothing(state: AppState) {
        let state = feed(state, vec![mouse(MouseEventKind::Moved, 20, 4)]);
        assert!(translate_raw_to_domain(mouse(MouseEventKind::Moved, 21, 4), &state).is_empty());
        assert!(translate_raw_to_domain(mouse(MouseEventKind::Moved, 0, 20), &AppState::default())
            .is_empty());
    }

    #[rstest]
    fn test_click_activates_page(state: AppState) {
        let state = feed(
            state,
            vec![
                mouse(MouseEventKind::Down(MouseButton::Left), 35, 4),
                mouse(MouseEventKind::Up(MouseButton::Left), 35, 4),
            ],
        );
        assert_eq!(state.navigation.active_id(), &PageId::new("3"));
        assert!(state.navigation.drag().is_idle());
    }

    #[rstest]
    fn test_click_on_connector_inserts_page(state: AppState) {
        let state = feed(
            state,
            vec![mouse(MouseEventKind::Down(MouseButton::Left), 29, 4)],
        );
        assert_eq!(
            state.navigation.page_order(),
            "Info → Details → Page 5 → Other → Ending"
        );
        assert_eq!(state.navigation.active_id(), &PageId::new("5"));
    }

    #[rstest]
    fn test_click_on_add_button_appends(state: AppState) {
        let state = feed(
            state,
            vec![mouse(MouseEventKind::Down(MouseButton::Left), 65, 4)],
        );
        assert_eq!(state.navigation.pages().last().map(|p| p.name.as_str()), Some("Page 5"));
        assert_eq!(state.navigation.active_id(), &PageId::new("5"));
    }

    #[rstest]
    fn test_drag_onto_page_reorders(state: AppState) {
        let state = feed(
            state,
            vec![
                mouse(MouseEventKind::Down(MouseButton::Left), 4, 4),
                mouse(MouseEventKind::Drag(MouseButton::Left), 10, 4),
                mouse(MouseEventKind::Drag(MouseButton::Left), 35, 4),
            ],
        );
        assert!(state.navigation.is_dragged(&PageId::new("1")));
        assert_eq!(state.navigation.drag().target(), Some(2));

        let state = feed(state, vec![mouse(MouseEventKind::Up(MouseButton::Left), 35, 4)]);
        assert_eq!(
            state.navigation.page_order(),
            "Details → Other → Info → Ending"
        );
        assert_eq!(state.navigation.active_id(), &PageId::new("1"));
    }

    #[rstest]
    fn test_drop_on_connector_lands_between_neighbors(state: AppState) {
        // Ending dragged onto the gap between Info and Details
        let state = feed(
            state,
            vec![
                mouse(MouseEventKind::Down(MouseButton::Left), 50, 4),
                mouse(MouseEventKind::Drag(MouseButton::Left), 13, 4),
                mouse(MouseEventKind::Up(MouseButton::Left), 13, 4),
            ],
        );
        assert_eq!(
            state.navigation.page_order(),
            "Info → Ending → Details → Other"
        );
    }

    #[rstest]
    fn test_release_outside_cancels_drag(state: AppState) {
        let state = feed(
            state,
            vec![
                mouse(MouseEventKind::Down(MouseButton::Left), 4, 4),
                mouse(MouseEventKind::Drag(MouseButton::Left), 35, 4),
                mouse(MouseEventKind::Drag(MouseButton::Left), 35, 18),
            ],
        );
        assert_eq!(state.navigation.drag().target(), None);
        let state = feed(state, vec![mouse(MouseEventKind::Up(MouseButton::Left), 35, 18)]);
        assert_eq!(
            state.navigation.page_order(),
            "Info → Details → Other → Ending"
        );
        assert!(state.navigation.drag().is_idle());
    }

    #[rstest]
    fn test_trigger_opens_menu_and_items_are_inert(state: AppState) {
        // Info is active, so its trigger at column 10 is visible
        let state = feed(
            state,
            vec![mouse(MouseEventKind::Down(MouseButton::Left), 10, 4)],
        );
        assert_eq!(state.navigation.menu().open_for(), Some(&PageId::new("1")));

        let before = state.navigation.page_order();
        // Menu sits under the trigger: items start at row 7, Delete after the separator
        let msgs = translate_raw_to_domain(mouse(MouseEventKind::Down(MouseButton::Left), 12, 12), &state);
        assert_eq!(msgs, vec![nav(NavigationMsg::ChooseMenuItem(MenuItem::Delete))]);
        let state = feed(state, vec![mouse(MouseEventKind::Down(MouseButton::Left), 12, 12)]);
        assert!(!state.navigation.menu().is_open());
        assert_eq!(state.navigation.page_order(), before);
    }

    #[rstest]
    fn test_click_outside_menu_closes_it(state: AppState) {
        let state = feed(
            state,
            vec![mouse(MouseEventKind::Down(MouseButton::Right), 20, 4)],
        );
        assert_eq!(state.navigation.menu().open_for(), Some(&PageId::new("2")));
        assert_eq!(
            translate_raw_to_domain(mouse(MouseEventKind::Down(MouseButton::Left), 70, 20), &state),
            vec![nav(NavigationMsg::CloseMenu)]
        );
    }

    #[rstest]
    fn test_drop_target_mapping(state: AppState) {
        let navigation = &state.navigation;
        let info = PageId::new("1");
        let ending = PageId::new("4");

        assert_eq!(drop_target(navigation, &info, Some(StripHit::Connector(1))), Some(1));
        assert_eq!(drop_target(navigation, &ending, Some(StripHit::Connector(1))), Some(2));
        assert_eq!(drop_target(navigation, &info, Some(StripHit::AddButton)), Some(3));
        assert_eq!(drop_target(navigation, &info, None), None);
    }
}
