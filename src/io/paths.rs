use crate::{CatalogError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in each candidate directory
pub const CONFIG_FILE_NAME: &str = "catalog.yaml";

/// Path management for book-catalog configuration files
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Platform configuration directory (e.g. ~/.config/book-catalog/)
    pub config_dir: PathBuf,
}

impl CatalogPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "book-catalog").ok_or_else(|| {
            CatalogError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Paths rooted at an explicit directory
    pub fn for_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    /// Config file inside the platform config directory
    pub fn user_config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Config file in the given working directory
    pub fn project_config_file(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Candidate config files in priority order: project first, then user
    pub fn config_candidates(&self, project_root: &Path) -> Vec<PathBuf> {
        vec![
            Self::project_config_file(project_root),
            self.user_config_file(),
        ]
    }
}
