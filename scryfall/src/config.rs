use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings for the [`ScryfallClient`](crate::ScryfallClient).
///
/// Every field is optional in the JSON file and falls back to its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// The cards endpoint, with a trailing slash.
    pub base_uri: String,
    /// Scryfall asks every client to identify itself.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: String::from("https://api.scryfall.com/cards/"),
            user_agent: format!("Nyxfall/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        let mut config: ClientConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        if !config.base_uri.ends_with('/') {
            config.base_uri.push('/');
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
