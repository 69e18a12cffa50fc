use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::view::SortKey;

/// book-catalog: browse and edit a book list from the terminal
#[derive(Parser, Debug)]
#[command(name = "book-catalog")]
#[command(version)]
#[command(about = "Search, sort, paginate and edit a book catalog")]
#[command(
    long_about = "book-catalog keeps a list of books in memory and lets you search, sort, page through, add, edit and delete them. Changes last for the session only."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: ./catalog.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON or YAML file with the books to start from
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Log filter directive (error, warn, info, debug, trace, or module=level)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file while the interactive screen is open
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive catalog screen (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Print one page of the catalog
    List {
        /// Case-insensitive text matched against title or author
        #[arg(short, long, default_value = "")]
        search: String,

        /// Column to sort by
        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to print, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        match self {
            #[cfg(feature = "tui")]
            Commands::Tui => true,
            Commands::List { .. } => false,
        }
    }
}

impl Default for Commands {
    #[cfg(feature = "tui")]
    fn default() -> Self {
        Commands::Tui
    }

    #[cfg(not(feature = "tui"))]
    fn default() -> Self {
        Commands::List {
            search: String::new(),
            sort: None,
            desc: false,
            page: 1,
            format: OutputFormat::Text,
        }
    }
}
