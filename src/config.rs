use serde::{ Deserialize, Serialize };
use std::env;
use std::fs;
use std::fmt;
use std::path::{ Path, PathBuf };
use thiserror::Error;

/// Environment variable naming a YAML config file
pub const CONFIG_PATH_ENV: &str = "CLASSROOM_CONFIG";
/// Environment variable that switches the square demo on
pub const ENABLE_SQUARE_ENV: &str = "CLASSROOM_ENABLE_SQUARE";
/// Environment variable holding a fixed seed for grading
pub const GRADE_SEED_ENV: &str = "CLASSROOM_GRADE_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar {
        name: String,
        value: String,
    },
}

/// Where the configuration file came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file; built-in defaults
    Defaults,
    /// Given with `--config`
    File(PathBuf),
    /// Named by `CLASSROOM_CONFIG`
    EnvFile(PathBuf),
}

impl ConfigSource {
    /// An explicit path wins over `CLASSROOM_CONFIG`
    pub fn resolve<F>(path: Option<&Path>, lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        match path {
            Some(path) => ConfigSource::File(path.to_path_buf()),
            None =>
                match lookup(CONFIG_PATH_ENV) {
                    Some(from_env) => ConfigSource::EnvFile(PathBuf::from(from_env)),
                    None => ConfigSource::Defaults,
                }
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::EnvFile(path) => write!(f, "${} = {}", CONFIG_PATH_ENV, path.display()),
        }
    }
}

/// Runtime configuration for the demos
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ClassroomConfig {
    /// Make the square demo available
    pub enable_square: bool,

    /// Fixed seed for the professor's grading, random when absent
    pub grade_seed: Option<u64>,

    /// Log level used when none is given on the command line
    pub log_level: Option<String>,
}

impl ClassroomConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ClassroomConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Resolve the config file (explicit path, then `CLASSROOM_CONFIG`) and
    /// apply environment overrides on top of it. Runs before the logger is
    /// up, so the source is returned for the caller to report.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let lookup = |name: &str| env::var(name).ok();
        let source = ConfigSource::resolve(path, lookup);

        let mut config = match &source {
            ConfigSource::Defaults => Self::default(),
            ConfigSource::File(path) | ConfigSource::EnvFile(path) => Self::from_file(path)?,
        };

        config.apply_env(lookup)?;
        Ok((config, source))
    }

    /// Apply overrides from a variable lookup; the lookup is injectable so
    /// tests do not have to touch the process environment
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        if let Some(value) = lookup(ENABLE_SQUARE_ENV) {
            self.enable_square = parse_flag(ENABLE_SQUARE_ENV, &value)?;
        }

        if let Some(value) = lookup(GRADE_SEED_ENV) {
            let seed = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: GRADE_SEED_ENV.to_string(),
                value: value.clone(),
            })?;
            self.grade_seed = Some(seed);
        }

        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ =>
            Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
            }),
    }
}
