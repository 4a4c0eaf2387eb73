//! Configuration handling for the form builder

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default tracing directive when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "form_builder_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuilderConfig {
    /// Tracing filter directive, e.g. "form_builder_tui=debug"
    pub log_filter: Option<String>,
    /// Capture the mouse for drag-and-drop reordering
    pub mouse_capture: Option<bool>,
    /// Show key hints in the status bar
    pub show_help: Option<bool>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "form-builder", "form-builder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_at(Self::config_path())
    }

    /// Defaults when there is no config dir or no file in it
    fn load_at(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BuilderConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }
}
