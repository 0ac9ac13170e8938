use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Executes the side effects requested by `update`
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::LogDebug { message } => {
                log::debug!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, returning one log line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        commands
            .iter()
            .map(|cmd| match self.execute_command(cmd) {
                Ok(()) => format!("✓ Executed: {}", cmd.name()),
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    error_msg
                }
            })
            .collect()
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::LogDebug { .. } => "LogDebug".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
