/// Screen modules for the catalog TUI
pub mod catalog;
