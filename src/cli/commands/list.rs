use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::CommandHandler;
use crate::catalog::Book;
use crate::cli::app::OutputFormat;
use crate::view::{CatalogView, SortDirection, SortKey};
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    view: CatalogView,
    pub format: OutputFormat,
}

/// Table row for the text output
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "id")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
}

/// JSON document for one page
#[derive(Debug, Serialize)]
struct PageOutput<'a> {
    page: usize,
    page_count: usize,
    matching: usize,
    books: Vec<&'a Book>,
}

impl ListCommand {
    /// Create a list command, applying search, sort and page to `view`
    pub fn new(
        mut view: CatalogView,
        search: &str,
        sort: Option<SortKey>,
        desc: bool,
        page: usize,
        format: OutputFormat,
    ) -> Self {
        view.search(search);
        if let Some(key) = sort {
            view.sort_by(key);
            if desc && view.sort().direction == SortDirection::Ascending {
                view.sort_by(key);
            }
        }
        if page == 0 || page > view.page_count() {
            tracing::warn!(page, page_count = view.page_count(), "Requested page out of range, clamping");
        }
        view.set_page(page);
        Self { view, format }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Render the current page in the selected format
    pub fn render(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_json(&self) -> Result<String> {
        let output = PageOutput {
            page: self.view.page(),
            page_count: self.view.page_count(),
            matching: self.view.matching_count(),
            books: self.view.display(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn render_text(&self) -> String {
        let rows: Vec<BookRow> = self
            .view
            .display()
            .into_iter()
            .map(|book| BookRow {
                id: book.id.0,
                title: book.title.clone(),
                author: book.author.clone(),
            })
            .collect();

        if rows.is_empty() {
            return "No books found.".to_string();
        }

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        format!(
            "{table}\nPage {} of {} ({} matching)",
            self.view.page(),
            self.view.page_count(),
            self.view.matching_count()
        )
    }
}

impl CommandHandler for ListCommand {
    fn execute(&mut self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
