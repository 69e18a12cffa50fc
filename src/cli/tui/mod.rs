/// Terminal User Interface for the catalog screen
pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use crate::view::CatalogView;
use crate::Result;

/// Entry point for the catalog screen; returns the working set as it was left
pub fn run(view: CatalogView) -> Result<CatalogView> {
    let app = app::App::new(view);
    app.run()
}
