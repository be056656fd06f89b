//! Service configuration read from the environment.

use std::num::NonZeroU32;
use std::path::PathBuf;

use geoquiz_core::{Catalog, CatalogError, DEFAULT_DURATION};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Runtime configuration.
///
/// Env vars:
/// - HOST: bind address (default 0.0.0.0)
/// - PORT: bind port (default 3000)
/// - SESSION_DURATION_SECS: countdown length, must be positive (default 900)
/// - CATALOG_PATH: JSON catalog replacing the bundled one
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub session_duration: NonZeroU32,
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value,
                reason: "expected a port number",
            })?,
            None => 3000,
        };

        let session_duration = match lookup("SESSION_DURATION_SECS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ConfigError::Invalid {
                    var: "SESSION_DURATION_SECS",
                    value,
                    reason: "expected a positive number of seconds",
                })?,
            None => DEFAULT_DURATION,
        };

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            session_duration,
            catalog_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the configured catalog, falling back to the bundled world list.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Catalog::from_json(&content)?)
            }
            None => Ok(Catalog::bundled()?),
        }
    }
}
