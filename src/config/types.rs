use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root structure of catalog.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// JSON or YAML file with the books to start from
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// tracing filter directive (e.g. "info", "book_catalog=debug")
    #[serde(default)]
    pub log_level: Option<String>,

    /// Log destination while the terminal screen is active
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl CatalogConfig {
    pub const DEFAULT_LOG_LEVEL: &'static str = "warn";

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(Self::DEFAULT_LOG_LEVEL)
    }

    /// Layer command-line values over file values
    pub fn with_overrides(
        mut self,
        seed_file: Option<PathBuf>,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if seed_file.is_some() {
            self.seed_file = seed_file;
        }
        if log_level.is_some() {
            self.log_level = log_level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}
