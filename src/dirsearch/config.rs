use crate::api::CmdMessage;
use crate::controller::Policy;
use crate::error::{DirError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const HOME_ENV: &str = "DIRSEARCH_HOME";

pub const KEY_POLICY: &str = "policy";
pub const KEY_DATA_FILE: &str = "data-file";

/// Configuration for dirsearch, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DirConfig {
    /// Query policy used when none is given on the command line
    #[serde(default)]
    pub policy: Policy,

    /// Directory file to load instead of the bundled sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Resolves the config directory: `$DIRSEARCH_HOME`, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "dirsearch", "dirsearch")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DirError::Config("could not determine a config directory".to_string()))
}

impl DirConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DirError::Io)?;
        let config: DirConfig = serde_json::from_str(&content).map_err(DirError::Serialization)?;
        Ok(config)
    }

    /// Like [`DirConfig::load`], but an unreadable file is logged and
    /// replaced by defaults. Saving afterwards overwrites the broken file.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref();
        Self::load(config_dir).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config in {}: {}", config_dir.display(), e);
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DirError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DirError::Serialization)?;
        fs::write(config_path, content).map_err(DirError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_POLICY => Some(self.policy.to_string()),
            KEY_DATA_FILE => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `data-file` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_POLICY => {
                self.policy = value.parse()?;
            }
            KEY_DATA_FILE => {
                self.data_file = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(DirError::Config(format!("unknown config key '{}'", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_POLICY, KEY_DATA_FILE]
            .into_iter()
            .map(|k| (k, self.get(k).unwrap_or_default()))
            .collect()
    }
}

/// Result of a `config` action: the config after the action, plus messages.
#[derive(Debug)]
pub struct ConfigOutcome {
    pub config: DirConfig,
    pub messages: Vec<CmdMessage>,
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<ConfigOutcome> {
    let mut config = DirConfig::load_or_default(config_dir);
    let mut messages = Vec::new();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => messages.push(CmdMessage::info(format!("{} = {}", key, value))),
            None => messages.push(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let shown = config.get(&key).unwrap_or_default();
            messages.push(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }

    Ok(ConfigOutcome { config, messages })
}
