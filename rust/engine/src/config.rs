//! Engine configuration: built-in defaults, overridden by a TOML file named in
//! `KLONDIKE_CONFIG`, overridden in turn by `KLONDIKE_SEED` and
//! `KLONDIKE_RECORD_PATH`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "KLONDIKE_CONFIG";
pub const SEED_ENV: &str = "KLONDIKE_SEED";
pub const RECORD_PATH_ENV: &str = "KLONDIKE_RECORD_PATH";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Deck seed; `None` deals from OS entropy
    pub seed: Option<u64>,
    /// JSONL file that receives game records
    pub record_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub record_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            record_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.record_path {
            cfg.record_path = Some(v);
            sources.record_path = ValueSource::File;
        }
    }

    if let Some(seed) = non_empty_var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("seed {seed:?} is not a u64")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(path) = non_empty_var(RECORD_PATH_ENV) {
        cfg.record_path = Some(PathBuf::from(path));
        sources.record_path = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    record_path: Option<PathBuf>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(path) = &cfg.record_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("record_path must not be empty".into()));
        }
    }
    Ok(())
}
