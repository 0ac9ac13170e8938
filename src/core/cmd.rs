use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the update function asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogInfo { message: String },
    LogDebug { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(mut commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_debug(message: impl Into<String>) -> Cmd {
        Cmd::LogDebug {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::log_info("hello");
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        // Batch should wrap when there are 2+ commands
        let cmds = vec![
            Cmd::log_info("a"),
            Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24,
            }),
        ];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 50,
        });

        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
