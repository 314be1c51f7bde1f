// Configuration loading and parsing (config/league.toml).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::draft::order::DraftOrder;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level tables in league.toml.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    league: LeagueConfig,
    #[serde(default)]
    data: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    /// Display name for the league.
    pub name: String,
    /// Number of teams in the draft. Team 1 is always the human seat.
    pub num_teams: u32,
    /// Turn order policy: "snake" (default) or "linear".
    #[serde(default)]
    pub draft_order: DraftOrder,
    /// Delay before a computer-controlled pick is applied, in milliseconds.
    #[serde(default = "default_ai_pick_delay_ms")]
    pub ai_pick_delay_ms: u64,
    /// Advisory per-position roster caps (position string -> count).
    /// Positions left out keep the built-in defaults.
    #[serde(default)]
    pub roster_caps: HashMap<String, usize>,
}

fn default_ai_pick_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
    pub rankings: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            players: "data/players.json".to_string(),
            rankings: "data/rankings.json".to_string(),
        }
    }
}

/// The assembled application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub data_paths: DataPaths,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league: LeagueConfig {
                name: "DraftRoom League".to_string(),
                num_teams: 8,
                draft_order: DraftOrder::default(),
                ai_pick_delay_ms: default_ai_pick_delay_ms(),
                roster_caps: HashMap::new(),
            },
            data_paths: DataPaths::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/league.toml` relative to the given base
/// directory. A missing file is not an error: the built-in defaults apply
/// (an 8-team snake draft). Parse and validation failures are errors.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("league.toml");

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: Box::new(e),
    })?;

    let config = Config {
        league: file.league,
        data_paths: file.data,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let teams = config.league.num_teams;
    if !(2..=32).contains(&teams) {
        return Err(ConfigError::ValidationError {
            field: "league.num_teams".to_string(),
            message: format!("must be between 2 and 32, got {}", teams),
        });
    }
    for (pos, &cap) in &config.league.roster_caps {
        if cap == 0 {
            return Err(ConfigError::ValidationError {
                field: format!("league.roster_caps.{}", pos),
                message: "cap must be at least 1".to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
