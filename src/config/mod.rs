//! catalog.yaml configuration and startup data
pub mod loader;
pub mod types;

pub use loader::{initial_catalog, ConfigLoader, LoadedConfig};
pub use types::CatalogConfig;
