use crate::errors::{AppError, AppResult};
use crate::models::window::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::models::{SortDirection, SortKey};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON saved from the backend's work history endpoint
    pub history_file: String,
    /// JSON saved from the backend's account details endpoint
    pub account_file: String,
    pub user_id: String,
    pub token_file: String,
    /// Where PDF reports land when no --file is given
    pub output_dir: String,
    pub default_sort: SortKey,
    pub default_direction: SortDirection,
    pub window_days: i64,
}

fn default_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "default".to_string())
}

fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            history_file: dir.join("work_history.json").to_string_lossy().to_string(),
            account_file: dir.join("account.json").to_string_lossy().to_string(),
            user_id: default_user(),
            token_file: dir.join("token").to_string_lossy().to_string(),
            output_dir: default_output_dir().to_string_lossy().to_string(),
            default_sort: SortKey::None,
            default_direction: SortDirection::Asc,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// Standard configuration directory for the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("workhistory")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".workhistory")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workhistory.conf")
    }

    /// Load `path`, or defaults when it does not exist.
    /// Fields missing from the file keep their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        if !(1..=MAX_WINDOW_DAYS).contains(&cfg.window_days) {
            return Err(AppError::Config(format!(
                "window_days must be between 1 and {MAX_WINDOW_DAYS} (got {})",
                cfg.window_days
            )));
        }

        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn history_path(&self) -> PathBuf {
        expand_tilde(&self.history_file)
    }

    pub fn account_path(&self) -> PathBuf {
        expand_tilde(&self.account_file)
    }

    pub fn token_path(&self) -> PathBuf {
        expand_tilde(&self.token_file)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }
}
