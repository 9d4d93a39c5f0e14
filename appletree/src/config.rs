use appletree_common::constants;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Log {
    pub level: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Eden {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CatalogPaths {
    pub trading_cards: Option<PathBuf>,
    pub tarot_cards: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Draw {
    pub rank_weights: Vec<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cooldowns {
    pub card_ms: u64,
    pub tarot_ms: u64,
    pub eden_card_ms: u64,
    pub message_ms: u64,
}

impl Cooldowns {
    pub fn card(&self) -> Duration {
        Duration::from_millis(self.card_ms)
    }
    pub fn tarot(&self) -> Duration {
        Duration::from_millis(self.tarot_ms)
    }
    pub fn eden_card(&self) -> Duration {
        Duration::from_millis(self.eden_card_ms)
    }
    pub fn message(&self) -> Duration {
        Duration::from_millis(self.message_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Debug {
    pub allowed_users: Vec<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Features {
    pub message_xp: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub log: Log,
    pub eden: Eden,
    #[serde(default)]
    pub catalog: CatalogPaths,
    pub draw: Draw,
    pub cooldowns: Cooldowns,
    pub debug: Debug,
    pub features: Features,
}

impl Config {
    pub fn new() -> Config {
        Config {
            log: Log {
                level: "info".to_string(),
            },
            eden: Eden {
                url: constants::EDEN_DEFAULT_URL.to_string(),
                timeout_secs: 10,
            },
            catalog: CatalogPaths::default(),
            draw: Draw {
                rank_weights: constants::RANK_WEIGHTS.to_vec(),
            },
            cooldowns: Cooldowns {
                card_ms: constants::CARD_COOLDOWN_MS,
                tarot_ms: constants::TAROT_COOLDOWN_MS,
                eden_card_ms: constants::EDEN_CARD_COOLDOWN_MS,
                message_ms: constants::MESSAGE_COOLDOWN_MS,
            },
            debug: Debug {
                allowed_users: vec![],
            },
            features: Features { message_xp: true },
        }
    }
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml = toml::to_string(&self)?;
        fs::write(path, toml)?;
        Ok(())
    }
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
