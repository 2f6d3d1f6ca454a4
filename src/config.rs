//! Parser and CLI configuration.
//!
//! ```toml
//! [parser]
//! use_prefix = false
//!
//! [output]
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Options that change how query strings are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Expect `$select` rather than `select`, and so on.
    #[serde(default = "default_true")]
    pub use_prefix: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { use_prefix: true }
    }
}

impl ParserConfig {
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for ParserConfig
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    pub fn use_prefix(mut self, use_prefix: bool) -> Self {
        self.config.use_prefix = use_prefix;
        self
    }

    pub fn build(self) -> ParserConfig {
        self.config
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// File name looked up in the working directory.
    pub const FILE_NAME: &'static str = "odata-query.toml";

    pub fn from_toml_str(content: &str) -> QueryResult<Self> {
        toml::from_str(content).map_err(|e| QueryError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load the first configuration file found in [`Config::search_paths`],
    /// or the defaults when there is none.
    pub fn discover() -> QueryResult<Self> {
        for path in Self::search_paths() {
            if path.is_file() {
                tracing::debug!("Loading config from {}", path.display());
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    /// `./odata-query.toml`, then `<config dir>/odata-query/config.toml`.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(Self::FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("odata-query").join("config.toml"));
        }
        paths
    }
}
