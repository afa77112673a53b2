//! Configuration for a bot instance.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::UserId;
use crate::error::{BotError, BotResult};

/// Configuration for a bot instance.
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Text a message must start with to be treated as a command.
    pub prefix: String,
    /// Directory holding `fish.json` and `bugs.json`.
    pub data_dir: PathBuf,
    /// Per-server settings file.
    pub settings_path: PathBuf,
    /// Admin list file.
    pub admins_path: PathBuf,
    /// The bot owner, allowed to run maintenance commands.
    pub owner_id: Option<UserId>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            data_dir: PathBuf::from("json"),
            settings_path: PathBuf::from("serversettings.json"),
            admins_path: PathBuf::from("adminlist.json"),
            owner_id: None,
        }
    }
}

impl BotConfig {
    /// Read a config from a JSON file.
    pub fn load(path: &Path) -> BotResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_json::from_str(&json)
            .map_err(|e| BotError::Config(format!("invalid config {}: {e}", path.display())))
    }

    /// Set the command prefix. An empty prefix is ignored.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.prefix = prefix;
        }
        self
    }

    /// Set the dataset directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the settings file.
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Set the admin list file.
    pub fn with_admins_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.admins_path = path.into();
        self
    }

    /// Set the bot owner.
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self
    }
}
