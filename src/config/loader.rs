use super::types::CatalogConfig;
use crate::catalog::{seed, Catalog};
use crate::io::CatalogPaths;
use crate::{CatalogError, Result};
use std::path::{Path, PathBuf};

/// A loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: CatalogConfig,
    /// File the configuration was read from; `None` means defaults
    pub source: Option<PathBuf>,
}

/// Configuration loader for catalog.yaml
pub struct ConfigLoader {
    project_root: PathBuf,
    paths: Option<CatalogPaths>,
}

impl ConfigLoader {
    /// Loader searching the current directory and the platform config dir
    pub fn new() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            project_root,
            paths: CatalogPaths::new().ok(),
        }
    }

    /// Loader with explicit search roots
    pub fn with_roots(project_root: &Path, paths: Option<CatalogPaths>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            paths,
        }
    }

    /// Load configuration from a specific file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<CatalogConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let mut config: CatalogConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        // Relative seed paths are relative to the config file
        if let (Some(seed), Some(dir)) = (config.seed_file.as_ref(), path.parent()) {
            if seed.is_relative() {
                config.seed_file = Some(dir.join(seed));
            }
        }

        Ok(config)
    }

    /// Resolve configuration: an explicit path must exist, otherwise the
    /// first discovered candidate wins and defaults apply when none exists.
    pub fn load(&self, explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            let config = self.load_file(path)?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            return Ok(LoadedConfig {
                config,
                source: Some(path.to_path_buf()),
            });
        }

        for candidate in self.candidates() {
            if candidate.is_file() {
                let config = self.load_file(&candidate)?;
                tracing::debug!(path = %candidate.display(), "Loaded configuration");
                return Ok(LoadedConfig {
                    config,
                    source: Some(candidate),
                });
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(LoadedConfig::default())
    }

    fn candidates(&self) -> Vec<PathBuf> {
        match &self.paths {
            Some(paths) => paths.config_candidates(&self.project_root),
            None => vec![CatalogPaths::project_config_file(&self.project_root)],
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the initial working set from configuration
pub fn initial_catalog(config: &CatalogConfig) -> Result<Catalog> {
    match &config.seed_file {
        Some(path) => Catalog::from_books(seed::load_seed_file(path)?),
        None => Ok(Catalog::seeded()),
    }
}
