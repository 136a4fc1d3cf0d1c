use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::keyboard::layout::KeyboardLayout;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_keyboard_layout")]
    pub keyboard_layout: String,
    /// How long validation messages stay on screen.
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_keyboard_layout() -> String {
    "qwerty".to_string()
}
fn default_notice_ms() -> u64 {
    1500
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keyboard_layout: default_keyboard_layout(),
            notice_ms: default_notice_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordly")
            .join("config.toml")
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn keyboard(&self) -> KeyboardLayout {
        KeyboardLayout::from_name(&self.keyboard_layout).unwrap_or_default()
    }

    /// Reset an unknown layout name to the default.
    pub fn normalize_keyboard_layout(&mut self) {
        if KeyboardLayout::from_name(&self.keyboard_layout).is_none() {
            tracing::warn!(
                layout = %self.keyboard_layout,
                "unknown keyboard layout, falling back to qwerty"
            );
            self.keyboard_layout = default_keyboard_layout();
        }
    }
}
