pub mod system;

use crate::{infrastructure::config::Config, model::page_navigation::PageNavigation};
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: PageNavigation,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the seeded pages and the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Name of the active page, if the active id still resolves
    pub fn active_page_name(&self) -> Option<&str> {
        self.navigation
            .active_page()
            .map(|page| page.name.as_str())
    }
}
