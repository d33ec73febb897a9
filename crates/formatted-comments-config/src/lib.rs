use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read draft at {draft_path}: {source}")]
    DraftReadError {
        draft_path: PathBuf,
        source: std::io::Error,
    },
}

/// Keys that trigger the emphasis commands when pressed with Ctrl or Cmd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub bold: char,
    pub italic: char,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            bold: 'b',
            italic: 'i',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Visible rows of the edit surface
    pub rows: u16,
    pub placeholder: String,
    /// Read-only mode: the toolbar and text area ignore input
    pub disabled: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            placeholder: "Write a comment...".to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shortcuts: ShortcutConfig,
    pub editor: EditorConfig,
    /// Raw-text file used as the initial editor contents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the draft path
        config.draft_path = config
            .draft_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/formatted-comments");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Initial editor text from `draft_path`.
    ///
    /// `Ok(None)` when no draft is configured or the file does not exist yet.
    pub fn load_draft(&self) -> Result<Option<String>, ConfigError> {
        let Some(draft_path) = &self.draft_path else {
            return Ok(None);
        };
        if !draft_path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(draft_path)
            .map(Some)
            .map_err(|source| ConfigError::DraftReadError {
                draft_path: draft_path.clone(),
                source,
            })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
