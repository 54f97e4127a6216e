use numguess_engine::game::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_DATA_PATH: &str = "data/numguess.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub difficulty: Difficulty,
    pub range_min: i64,
    pub range_max: i64,
    pub seed: Option<u64>,
    pub data_path: String,
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
    pub difficulty: ValueSource,
    pub range_min: ValueSource,
    pub range_max: ValueSource,
    pub seed: ValueSource,
    pub data_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            difficulty: ValueSource::Default,
            range_min: ValueSource::Default,
            range_max: ValueSource::Default,
            seed: ValueSource::Default,
            data_path: ValueSource::Default,
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
            difficulty: Difficulty::Hard,
            range_min: 1,
            range_max: 100,
            seed: None,
            data_path: DEFAULT_DATA_PATH.into(),
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

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("NUMGUESS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.difficulty {
            cfg.difficulty = parse_difficulty(&v)?;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.range_min {
            cfg.range_min = v;
            sources.range_min = ValueSource::File;
        }
        if let Some(v) = f.range_max {
            cfg.range_max = v;
            sources.range_max = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.data_path {
            cfg.data_path = v;
            sources.data_path = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("NUMGUESS_DIFFICULTY")
        && !v.is_empty()
    {
        cfg.difficulty = parse_difficulty(&v)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("NUMGUESS_MIN")
        && !v.is_empty()
    {
        cfg.range_min = v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid range_min".into()))?;
        sources.range_min = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("NUMGUESS_MAX")
        && !v.is_empty()
    {
        cfg.range_max = v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid range_max".into()))?;
        sources.range_max = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("NUMGUESS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("NUMGUESS_DATA")
        && !path.is_empty()
    {
        cfg.data_path = path;
        sources.data_path = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    range_min: Option<i64>,
    #[serde(default)]
    range_max: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    data_path: Option<String>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, ConfigError> {
    s.parse()
        .map_err(|e| ConfigError::Invalid(format!("Invalid difficulty: {}", e)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.range_min > cfg.range_max {
        return Err(ConfigError::Invalid(format!(
            "range_min {} is greater than range_max {}",
            cfg.range_min, cfg.range_max
        )));
    }
    if cfg.data_path.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "data_path must not be empty".into(),
        ));
    }
    Ok(())
}
