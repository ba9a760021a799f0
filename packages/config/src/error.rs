use domain::ValidationResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config {path}: {message}")]
    Parse {
        path: String,
        format: &'static str,
        message: String,
    },

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {}", describe(.0))]
    Invalid(ValidationResult),
}

fn describe(result: &ValidationResult) -> String {
    result
        .errors()
        .map(|i| format!("{} {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}
