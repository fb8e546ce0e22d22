use crate::error::{ArkivError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_PAGE_SIZE: usize = 16;
const DEFAULT_MAX_BUTTONS: usize = 4;
const DEFAULT_REVEAL_DELAY_MS: u64 = 2000;

/// Browser tuning, stored in config.json under the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowseConfig {
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Numbered buttons shown in the pagination bar.
    #[serde(default = "default_max_buttons")]
    pub max_buttons: usize,

    /// Artificial pause before results render, in milliseconds.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_buttons() -> usize {
    DEFAULT_MAX_BUTTONS
}

fn default_reveal_delay_ms() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_buttons: DEFAULT_MAX_BUTTONS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl BrowseConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BrowseConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// A zero page size would make every result set pageless.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ArkivError::Config("page-size must be at least 1".into()));
        }
        Ok(())
    }
}
