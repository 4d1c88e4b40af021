use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

pub const DEFAULT_CATALOG_SOURCE: &str = "snippets.json";
pub const DEFAULT_EXECUTE_ENDPOINT: &str = "http://127.0.0.1:8080/execute";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Where the snippet catalog is read from: an http(s) URL or a file path.
    #[serde(default = "default_catalog_source")]
    pub catalog_source: String,

    /// Endpoint of the external execution service.
    #[serde(default = "default_execute_endpoint")]
    pub execute_endpoint: String,

    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_code_font_size")]
    pub code_font_size: u32,
}

fn default_catalog_source() -> String {
    DEFAULT_CATALOG_SOURCE.to_string()
}

fn default_execute_endpoint() -> String {
    DEFAULT_EXECUTE_ENDPOINT.to_string()
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_code_font_size() -> u32 {
    14
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            catalog_source: default_catalog_source(),
            execute_endpoint: default_execute_endpoint(),
            theme_mode: default_theme_mode(),
            code_font_size: default_code_font_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from the standard config path. The file is only read;
    /// a missing file means defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from `path`. Missing or unreadable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<AppSettings>(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Err(e) = settings.validate() {
            eprintln!("{}. Using default execution endpoint.", e);
            settings.execute_endpoint = default_execute_endpoint();
        }
        settings
    }

    /// Reject endpoints the HTTP client cannot talk to.
    pub fn validate(&self) -> Result<(), AppError> {
        let endpoint = self.execute_endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Ok(())
        } else {
            Err(AppError::Settings(format!(
                "execute_endpoint '{}' is not an http(s) URL",
                self.execute_endpoint
            )))
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme_mode == ThemeMode::Dark
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("snippetdeck");
        path.push("settings.json");
        path
    }
}
