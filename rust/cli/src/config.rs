//! Layered configuration: built-in defaults, then a TOML file named by
//! `ONECARD_CONFIG`, then `ONECARD_*` environment variables. Command-line
//! flags are applied on top by each command.

use serde::{Deserialize, Serialize};
use std::fs;

use onecard_ai::AI_KINDS;
use onecard_engine::hand::INITIAL_HAND_SIZE;

/// Largest hand size accepted from configuration.
pub const MAX_HAND_SIZE: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub hand_size: usize,
    pub max_turns: u32,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub hand_size: ValueSource,
    pub max_turns: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            hand_size: ValueSource::Default,
            max_turns: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: INITIAL_HAND_SIZE,
            max_turns: 200,
            ai: "baseline".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ONECARD_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.max_turns {
            cfg.max_turns = v;
            sources.max_turns = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("ONECARD_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(size) = std::env::var("ONECARD_HAND_SIZE")
        && !size.is_empty()
    {
        cfg.hand_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hand_size".into()))?;
        sources.hand_size = ValueSource::Env;
    }
    if let Ok(turns) = std::env::var("ONECARD_MAX_TURNS")
        && !turns.is_empty()
    {
        cfg.max_turns = turns
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_turns".into()))?;
        sources.max_turns = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("ONECARD_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    max_turns: Option<u32>,
    #[serde(default)]
    ai: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.hand_size == 0 || cfg.hand_size > MAX_HAND_SIZE {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: hand_size must be within 1..={}",
            MAX_HAND_SIZE
        )));
    }
    if cfg.max_turns == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_turns must be >=1".into(),
        ));
    }
    if !AI_KINDS.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}
