use anyhow::Context;
use clap::Parser;
use book_catalog::{
    cli::commands::{list::ListCommand, CommandHandler},
    cli::{Cli, Commands},
    config::{initial_catalog, ConfigLoader},
    logging::{initialize_tracing, LogTarget},
    CatalogView,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    let loaded = ConfigLoader::new()
        .load(cli.config.as_deref())
        .context("loading configuration")?;
    let config = loaded
        .config
        .with_overrides(cli.seed.clone(), cli.log_level.clone(), cli.log_file.clone());

    // Logs to stderr, or to a file while the screen owns the terminal
    let target = match (command.is_interactive(), config.log_file.as_deref()) {
        (true, Some(path)) => LogTarget::File(path),
        (true, None) => LogTarget::Disabled,
        (false, _) => LogTarget::Stderr,
    };
    initialize_tracing(config.log_level(), target)?;

    if let Some(source) = &loaded.source {
        tracing::info!(path = %source.display(), "Using configuration file");
    }

    let catalog = initial_catalog(&config).context("loading seed books")?;
    let view = CatalogView::new(catalog);

    let mut handler: Box<dyn CommandHandler> = match command {
        #[cfg(feature = "tui")]
        Commands::Tui => Box::new(book_catalog::cli::commands::tui::TuiCommand::new(view)),
        Commands::List {
            search,
            sort,
            desc,
            page,
            format,
        } => Box::new(ListCommand::new(view, &search, sort, desc, page, format)),
    };

    tracing::debug!(command = handler.name(), "Running command");
    handler.execute()?;

    Ok(())
}
