//! Per-server settings: default hemisphere and hemisphere aliases.
//!
//! Settings are read-only from the bot's point of view. They are loaded from
//! a JSON file maintained outside the bot:
//!
//! ```json
//! {
//!   "aliases": { "northern": ["northern", "north"], "southern": ["southern", "south"] },
//!   "servers": { "1234": { "name": "Island", "hemisphere": "southern" } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use nook_core::{CritterError, Hemisphere, HemisphereAliases};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::ServerId;
use crate::error::{BotError, BotResult};

/// Settings for one server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Display name of the server.
    #[serde(default)]
    pub name: String,
    /// Hemisphere used when a command does not name one.
    #[serde(default)]
    pub hemisphere: Option<Hemisphere>,
}

/// Read access to per-server settings.
pub trait SettingsStore {
    /// The default hemisphere configured for a server.
    fn hemisphere(&self, server: ServerId) -> Option<Hemisphere>;

    /// The accepted spellings for each hemisphere.
    fn aliases(&self) -> &HemisphereAliases;

    /// Every server the store knows about, ordered by ID.
    fn servers(&self) -> Vec<(ServerId, &ServerEntry)>;
}

/// Resolve a hemisphere from user input, falling back to the server default.
///
/// `input` is matched against the store's aliases. Without input, the
/// server's default is used; a direct message or a server with no default is
/// an [`CritterError::InvalidHemisphere`] with empty input.
pub fn resolve_hemisphere(
    store: &dyn SettingsStore,
    server: Option<ServerId>,
    input: Option<&str>,
) -> BotResult<Hemisphere> {
    match input {
        Some(text) => store
            .aliases()
            .resolve(text)
            .ok_or_else(|| CritterError::InvalidHemisphere(text.to_string()).into()),
        None => server
            .and_then(|id| store.hemisphere(id))
            .ok_or_else(|| CritterError::InvalidHemisphere(String::new()).into()),
    }
}

/// Settings held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySettings {
    /// Accepted spellings for each hemisphere.
    #[serde(default)]
    pub aliases: HemisphereAliases,
    /// Known servers keyed by ID.
    #[serde(default)]
    pub servers: BTreeMap<ServerId, ServerEntry>,
}

impl MemorySettings {
    /// Empty settings with the default aliases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a server with an optional default hemisphere.
    pub fn with_server(
        mut self,
        id: ServerId,
        name: impl Into<String>,
        hemisphere: Option<Hemisphere>,
    ) -> Self {
        self.servers.insert(
            id,
            ServerEntry {
                name: name.into(),
                hemisphere,
            },
        );
        self
    }

    /// Replace the alias table.
    pub fn with_aliases(mut self, aliases: HemisphereAliases) -> Self {
        self.aliases = aliases;
        self
    }
}

impl SettingsStore for MemorySettings {
    fn hemisphere(&self, server: ServerId) -> Option<Hemisphere> {
        self.servers.get(&server).and_then(|entry| entry.hemisphere)
    }

    fn aliases(&self) -> &HemisphereAliases {
        &self.aliases
    }

    fn servers(&self) -> Vec<(ServerId, &ServerEntry)> {
        self.servers.iter().map(|(id, entry)| (*id, entry)).collect()
    }
}

/// Settings loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct JsonSettings {
    inner: MemorySettings,
}

impl JsonSettings {
    /// Load settings from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> BotResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
            .map_err(|e| BotError::Config(format!("invalid settings {}: {e}", path.display())))
    }

    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let inner: MemorySettings = serde_json::from_str(json)?;
        Ok(Self { inner })
    }
}

impl SettingsStore for JsonSettings {
    fn hemisphere(&self, server: ServerId) -> Option<Hemisphere> {
        self.inner.hemisphere(server)
    }

    fn aliases(&self) -> &HemisphereAliases {
        self.inner.aliases()
    }

    fn servers(&self) -> Vec<(ServerId, &ServerEntry)> {
        self.inner.servers()
    }
}
