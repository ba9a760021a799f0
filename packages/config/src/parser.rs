use crate::error::ConfigError;
use crate::types::RbiConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming a config file; checked after `--config`.
pub const CONFIG_ENV: &str = "RBI_CONFIG";

/// Supported config formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// Multi-format config parser (JSON, YAML, TOML)
pub struct ConfigParser;

impl ConfigParser {
    /// Auto-detect format from file extension and parse
    pub fn parse_file(path: &Path) -> Result<RbiConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let format = Self::detect_format(path)?;
        Self::parse(&content, format).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            format: format.name(),
            message,
        })
    }

    /// Parse config from string with explicit format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<RbiConfig, String> {
        match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Detect format from file extension
    pub fn detect_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ConfigError::UnsupportedFormat(format!("{} has no extension", path.display()))
            })?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(format!(".{}", extension))),
        }
    }

    /// Find a config file in directory with priority:
    /// 1. rbi.toml
    /// 2. rbi.json
    /// 3. rbi.yaml / rbi.yml
    pub fn find_config(dir: &Path) -> Option<PathBuf> {
        let candidates = ["rbi.toml", "rbi.json", "rbi.yaml", "rbi.yml"];

        candidates
            .iter()
            .map(|filename| dir.join(filename))
            .find(|path| path.exists())
    }
}

/// A config together with the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: RbiConfig,
    pub path: Option<PathBuf>,
}

/// Resolves which config file applies and loads it.
///
/// Order: explicit path, `RBI_CONFIG`, `rbi.*` in the search directory,
/// `<user config dir>/rbi/config.toml`, built-in defaults.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    env_path: Option<PathBuf>,
    search_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(search_dir: impl Into<PathBuf>) -> Self {
        Self {
            explicit: None,
            env_path: std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            search_dir: search_dir.into(),
            user_dir: dirs::config_dir().map(|d| d.join("rbi")),
        }
    }

    /// An explicit path wins over `RBI_CONFIG`.
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Overrides the value read from `RBI_CONFIG`.
    pub fn with_env_path(mut self, path: Option<PathBuf>) -> Self {
        self.env_path = path;
        self
    }

    pub fn without_env(self) -> Self {
        self.with_env_path(None)
    }

    pub fn with_user_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_dir = dir;
        self
    }

    pub fn locate(&self) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = self.explicit.as_ref().or(self.env_path.as_ref()) {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            return Ok(Some(path.clone()));
        }

        if let Some(path) = ConfigParser::find_config(&self.search_dir) {
            return Ok(Some(path));
        }

        Ok(self
            .user_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.exists()))
    }

    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let path = self.locate()?;
        let config = match &path {
            Some(p) => {
                debug!(path = %p.display(), "loading configuration");
                ConfigParser::parse_file(p)?
            }
            None => {
                debug!("no configuration file found; using defaults");
                RbiConfig::default()
            }
        };

        let validation = config.validate();
        for issue in validation.warnings() {
            warn!(field = %issue.field, "{}", issue.message);
        }
        if validation.has_errors() {
            return Err(ConfigError::Invalid(validation));
        }

        Ok(LoadedConfig { config, path })
    }
}
