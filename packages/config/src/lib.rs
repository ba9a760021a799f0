pub mod error;
pub mod parser;
pub mod types;

pub use error::ConfigError;
pub use parser::{ConfigFormat, ConfigLoader, ConfigParser, LoadedConfig, CONFIG_ENV};
pub use types::{OutputFormat, RbiConfig};
