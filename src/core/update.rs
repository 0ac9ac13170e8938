use crate::{
    core::cmd::Cmd,
    core::msg::{navigation::NavigationMsg, system::SystemMsg, Msg},
    core::state::AppState,
    model::page_navigation::{Message as NavigationMessage, Release},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Navigation(navigation_msg) => {
            let commands = update_navigation(navigation_msg, &mut state);
            (state, commands)
        }
    }
}

/// Applies a navigation message to the page navigation model.
///
/// Structural changes (insert, move) also set the status line and emit a log
/// command; hover and gesture bookkeeping emit nothing.
fn update_navigation(msg: NavigationMsg, state: &mut AppState) -> Vec<Cmd> {
    let nav = &mut state.navigation;
    match msg {
        NavigationMsg::SetActive(id) => {
            nav.update(NavigationMessage::PageActivated(id));
            vec![]
        }
        NavigationMsg::SelectNeighbor(direction) => {
            nav.update(NavigationMessage::NeighborActivated(direction));
            vec![]
        }
        NavigationMsg::InsertAfter(index) => inserted_after(state, index),
        NavigationMsg::InsertAfterActive => {
            let index = nav
                .active_index()
                .unwrap_or_else(|| nav.len().saturating_sub(1));
            inserted_after(state, index)
        }
        NavigationMsg::AppendAtEnd => {
            nav.update(NavigationMessage::PageAppended);
            let name = state.active_page_name().unwrap_or_default().to_string();
            announce(state, "Added", format!("{name} at the end"))
        }
        NavigationMsg::Reorder {
            source,
            destination,
        } => {
            let moved = nav.page(source).map(|page| page.name.clone());
            nav.update(NavigationMessage::PageMoved {
                source,
                destination,
            });
            moved_to(state, moved, source, destination)
        }
        NavigationMsg::ShiftActive(direction) => {
            let before = nav.active_index();
            let moved = nav.active_page().map(|page| page.name.clone());
            nav.update(NavigationMessage::ActivePageShifted(direction));
            let after = state.navigation.active_index();
            match (before, after) {
                (Some(source), Some(destination)) => {
                    moved_to(state, moved, source, Some(destination))
                }
                _ => vec![],
            }
        }

        NavigationMsg::HoverInsertionPoint(index) => {
            nav.update(NavigationMessage::InsertionPointHovered(index));
            vec![]
        }
        NavigationMsg::HoverPage(id) => {
            nav.update(NavigationMessage::PageHovered(id));
            vec![]
        }
        NavigationMsg::ClearHover => {
            nav.update(NavigationMessage::HoverCleared);
            vec![]
        }

        NavigationMsg::PressPage { id, column, row } => {
            nav.update(NavigationMessage::PagePressed { id, column, row });
            vec![]
        }
        NavigationMsg::StartDrag(id) => {
            let cmd = Cmd::log_debug(format!("drag started on page {id}"));
            nav.update(NavigationMessage::DragStarted(id));
            vec![cmd]
        }
        NavigationMsg::UpdateDragTarget(target) => {
            nav.update(NavigationMessage::DragTargetChanged(target));
            vec![]
        }
        NavigationMsg::ReleasePointer => {
            let release = nav.release();
            let moved = match &release {
                Some(Release::Drop { source, .. }) => nav.page(*source).map(|p| p.name.clone()),
                _ => None,
            };
            nav.update(NavigationMessage::PointerReleased);
            match release {
                Some(Release::Drop {
                    source,
                    destination: Some(destination),
                    ..
                }) => moved_to(state, moved, source, Some(destination)),
                Some(Release::Drop {
                    id,
                    destination: None,
                    ..
                }) => vec![Cmd::log_debug(format!(
                    "drag of page {id} cancelled outside any drop target"
                ))],
                Some(Release::Click(_)) | None => vec![],
            }
        }
        NavigationMsg::CancelDrag => {
            nav.update(NavigationMessage::DragCancelled);
            vec![Cmd::log_debug("drag cancelled")]
        }

        NavigationMsg::OpenMenu(id) => {
            nav.update(NavigationMessage::MenuOpened(id));
            vec![]
        }
        NavigationMsg::OpenMenuForActive => {
            if nav.active_page().is_some() {
                let id = nav.active_id().clone();
                nav.update(NavigationMessage::MenuOpened(id));
            }
            vec![]
        }
        NavigationMsg::CloseMenu => {
            nav.update(NavigationMessage::MenuClosed);
            vec![]
        }
        NavigationMsg::HighlightPreviousMenuItem => {
            nav.update(NavigationMessage::PreviousMenuItemHighlighted);
            vec![]
        }
        NavigationMsg::HighlightNextMenuItem => {
            nav.update(NavigationMessage::NextMenuItemHighlighted);
            vec![]
        }
        NavigationMsg::ChooseMenuItem(item) => {
            let target = nav
                .menu()
                .open_for()
                .map(ToString::to_string)
                .unwrap_or_default();
            nav.update(NavigationMessage::MenuItemChosen(item));
            vec![Cmd::log_debug(format!(
                "menu item \"{item}\" chosen for page {target}; it has no action"
            ))]
        }
        NavigationMsg::ChooseHighlightedMenuItem => match nav.menu().highlighted_item() {
            Some(item) if nav.menu().is_open() => {
                update_navigation(NavigationMsg::ChooseMenuItem(item), state)
            }
            _ => vec![],
        },
    }
}

fn inserted_after(state: &mut AppState, index: usize) -> Vec<Cmd> {
    let after = state.navigation.page(index).map(|page| page.name.clone());
    state
        .navigation
        .update(NavigationMessage::PageInsertedAfter(index));
    let name = state.active_page_name().unwrap_or_default().to_string();
    match after {
        Some(after) => announce(state, "Added", format!("{name} after {after}")),
        None => announce(state, "Added", name),
    }
}

fn moved_to(
    state: &mut AppState,
    moved: Option<String>,
    source: usize,
    destination: Option<usize>,
) -> Vec<Cmd> {
    match (moved, destination) {
        (Some(name), Some(destination)) if destination != source => announce(
            state,
            "Moved",
            format!("{name} to position {}", destination.min(state.navigation.len() - 1) + 1),
        ),
        _ => vec![],
    }
}

fn announce(state: &mut AppState, label: &str, message: String) -> Vec<Cmd> {
    let line = format!("[{label}] {message}");
    let mut cmds = state
        .system
        .update(SystemMsg::UpdateStatusMessage(line.clone()));
    cmds.push(Cmd::log_info(format!("{line}; order: {}", state.navigation.page_order())));
    cmds
}
