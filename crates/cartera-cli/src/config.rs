use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional settings file, looked up next to the roster.
pub const CONFIG_FILE: &str = "cartera.toml";

/// Per-roster settings. A missing file or field falls back to the
/// built-in defaults; command-line flags win over both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Greeting embedded in WhatsApp links when no --message is given.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Days ahead the next follow-up defaults to when recording.
    #[serde(default = "default_next_lead_days")]
    pub next_lead_days: u64,
}

fn default_greeting() -> String {
    cartera_engine::DEFAULT_GREETING.to_string()
}

fn default_next_lead_days() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            next_lead_days: default_next_lead_days(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config.greeting, cartera_engine::DEFAULT_GREETING);
        assert_eq!(config.next_lead_days, 15);
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "next_lead_days = 7\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.next_lead_days, 7);
        assert_eq!(config.greeting, cartera_engine::DEFAULT_GREETING);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "next_lead_days = \"soon\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
