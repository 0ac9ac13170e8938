use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the runtime from terminal events and renders every cycle
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
}

impl AppRunner {
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        let mut runtime = Runtime::new(AppState::new_with_config(config));
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx);

        Self {
            runtime,
            tui,
            tui_rx,
            components: Components::new(),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run until quit is requested or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        while self.run_one_cycle().await? {}
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Enter the terminal and seed the viewport from its current size
    pub async fn start(&mut self) -> Result<()> {
        let area = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));
        self.update().await?;
        self.render().await
    }

    /// One update cycle; failed commands are reported in the status line
    async fn update(&mut self) -> Result<()> {
        for line in self.runtime.run_update_cycle() {
            if let Some(error) = line.strip_prefix("✗ ") {
                self.runtime.send_raw_msg(RawMsg::Error(error.to_string()));
            }
        }
        self.apply_tui_commands().await
    }

    /// Handle one terminal event; returns false once the loop should stop
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let event = self.tui.lock().await.next().await;
        let Some(event) = event else {
            log::debug!("event source closed");
            return Ok(false);
        };

        if let Some(raw_msg) = Self::raw_msg_for(event) {
            self.runtime.send_raw_msg(raw_msg);
        }
        self.update().await?;

        if self.runtime.state().system.should_suspend {
            self.suspend().await?;
        }
        if self.runtime.state().system.should_quit {
            return Ok(false);
        }

        self.render().await?;
        Ok(true)
    }

    fn raw_msg_for(event: Event) -> Option<RawMsg> {
        match event {
            Event::Quit | Event::Closed => Some(RawMsg::Quit),
            Event::Tick => Some(RawMsg::Tick),
            Event::Render => Some(RawMsg::Render),
            Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            Event::Key(key) => Some(RawMsg::Key(key)),
            Event::Mouse(mouse) => Some(RawMsg::Mouse(mouse)),
            Event::Error => Some(RawMsg::Error("terminal input error".to_string())),
            Event::Init | Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    async fn apply_tui_commands(&mut self) -> Result<()> {
        while let Ok(command) = self.tui_rx.try_recv() {
            match command {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }
        Ok(())
    }

    /// Hand the terminal back to the shell, then pick up where we left off
    async fn suspend(&mut self) -> Result<()> {
        let area = {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
            tui.size()?
        };
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));
        self.update().await
    }

    pub async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |frame| components.render(frame, state))?;
        Ok(())
    }
}
