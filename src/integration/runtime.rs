use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Owns the state and drives translate -> update -> execute
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Route TuiCommand execution to the host
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("processing {msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    /// Process all messages in queue
    ///
    /// Raw messages are translated one at a time against the state left by
    /// the previous one, since hit-testing depends on hover and drag state.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Anything queued directly goes first
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate(raw_msg);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate(raw_msg);
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn get_stats(&self) -> RuntimeStats {
        let navigation = &self.state.navigation;
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            page_count: navigation.len(),
            active_page: navigation.active_id().to_string(),
            is_dragging: navigation.drag().is_dragging(),
            is_menu_open: navigation.menu().is_open(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub page_count: usize,
    pub active_page: String,
    pub is_dragging: bool,
    pub is_menu_open: bool,
}
