use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5605;
pub const DEFAULT_STORAGE_DIR: &str = "./store";
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 2;
pub const DEFAULT_PUBLIC_HOST: &str = "localhost";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Parse {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub storage_dir: PathBuf,
    pub max_file_size_mb: u64,
    pub public_upload: bool,
    /// Host name placed in returned download URLs
    pub public_host: String,
    pub durable_writes: bool,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            public_upload: true,
            public_host: DEFAULT_PUBLIC_HOST.to_string(),
            durable_writes: true,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            port: match lookup("HASHDROP_PORT") {
                Some(v) => parse_number("HASHDROP_PORT", &v)?,
                None => defaults.port,
            },
            storage_dir: lookup("HASHDROP_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            max_file_size_mb: match lookup("HASHDROP_MAX_FILE_SIZE") {
                Some(v) => parse_number("HASHDROP_MAX_FILE_SIZE", &v)?,
                None => defaults.max_file_size_mb,
            },
            public_upload: match lookup("HASHDROP_PUBLIC_UPLOAD") {
                Some(v) => parse_bool("HASHDROP_PUBLIC_UPLOAD", &v)?,
                None => defaults.public_upload,
            },
            public_host: lookup("HASHDROP_PUBLIC_HOST").unwrap_or(defaults.public_host),
            durable_writes: match lookup("HASHDROP_DURABLE_WRITES") {
                Some(v) => parse_bool("HASHDROP_DURABLE_WRITES", &v)?,
                None => defaults.durable_writes,
            },
            log_json: match lookup("HASHDROP_LOG_JSON") {
                Some(v) => parse_bool("HASHDROP_LOG_JSON", &v)?,
                None => defaults.log_json,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "HASHDROP_PORT must not be 0".to_string(),
            ));
        }

        if self.max_file_size_mb == 0 {
            return Err(ConfigError::Invalid(
                "HASHDROP_MAX_FILE_SIZE must be at least 1 MB".to_string(),
            ));
        }

        // Anything above this would overflow once converted to bytes
        if self.max_file_size_mb > u64::MAX >> 20 {
            return Err(ConfigError::Invalid(
                "HASHDROP_MAX_FILE_SIZE is too large".to_string(),
            ));
        }

        if self.public_host.is_empty() || self.public_host.contains('/') {
            return Err(ConfigError::Invalid(
                "HASHDROP_PUBLIC_HOST must be a bare host name".to_string(),
            ));
        }

        Ok(())
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb << 20
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// `http://host:port` prefix of returned download URLs
    pub fn public_base_url(&self) -> String {
        format!("http://{}:{}", self.public_host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        var,
        expected: "a non-negative integer",
        value: value.to_string(),
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(ConfigError::Parse {
            var,
            expected: "a boolean",
            value: value.to_string(),
        }),
    }
}
