use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::{
        config::{KeyBindings, Styles},
        controller::{ClassListAdapter, ElementIds},
    },
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Base URL; notifications go to `<endpoint>/like`
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl NotifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// Load from the project config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Layer embedded defaults, optional files in `config_dir` and
    /// `THUMBS__*` environment variables
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;

        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?
            .set_default("notifier.endpoint", default_config.notifier.endpoint.clone())?
            .set_default("notifier.timeout_ms", default_config.notifier.timeout_ms)?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            builder = builder.add_source(config::File::from(path.clone()).format(*format).required(false));
            if path.exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix("THUMBS")
                .separator("__")
                .try_parsing(true),
        );

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings and styles into user config
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }
        for (name, style) in default_config.styles.iter() {
            cfg.styles.entry(name.clone()).or_insert(*style);
        }

        if cfg.notifier.endpoint.trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("notifier.endpoint")));
        }

        Ok(cfg)
    }

    /// Element registry addressing the configured host element ids
    pub fn class_list_adapter(&self) -> ClassListAdapter {
        ClassListAdapter::new(self.elements.clone())
    }
}
