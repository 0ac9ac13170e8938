use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// Built-in keybindings and styles only
    pub fn new_default() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user config files from the config dir over the built-in defaults
    ///
    /// Every file is optional. Bindings and styles missing from the user
    /// files fall back to the defaults one entry at a time.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::new_default()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    fn merge_defaults(&mut self, defaults: Self) {
        for (keyseq, action) in defaults.keybindings.0 {
            self.keybindings.entry(keyseq).or_insert(action);
        }
        for (style_key, style) in defaults.styles.0 {
            self.styles.entry(style_key).or_insert(style);
        }
    }
}
