use super::CommandHandler;
use crate::cli::tui;
use crate::view::CatalogView;
use crate::{CatalogError, Result};

/// Handler for the `tui` command
pub struct TuiCommand {
    view: Option<CatalogView>,
}

impl TuiCommand {
    pub fn new(view: CatalogView) -> Self {
        Self { view: Some(view) }
    }
}

impl CommandHandler for TuiCommand {
    fn execute(&mut self) -> Result<()> {
        let view = self
            .view
            .take()
            .ok_or_else(|| CatalogError::Terminal("catalog screen already ran".to_string()))?;
        let view = tui::run(view)?;
        tracing::debug!(books = view.len(), "Session ended; working set discarded");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tui"
    }
}
