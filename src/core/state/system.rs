use ratatui::layout::Rect;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Last known terminal size; layout and mouse hit-testing derive from it
    viewport: Rect,
}

impl SystemState {
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message.replace('\n', " "));
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::log_info(format!("error shown to user: {error}"))]
            }
        }
    }
}
