//! Terminal rendition of the catalog page: a table on stdout, prompts and
//! alerts on stderr, confirmations read from stdin.

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use catalog_core::{BookForm, BookRow, CatalogView};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RowDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Actions")]
    actions: String,
}

impl From<BookRow> for RowDisplay {
    fn from(row: BookRow) -> Self {
        let (id, actions) = match row.id {
            Some(id) => (id.to_string(), format!("edit {id} | delete {id}")),
            None => (String::new(), String::new()),
        };
        Self {
            id,
            title: row.title,
            author: row.author,
            isbn: row.isbn,
            actions,
        }
    }
}

pub struct TerminalView<O, E, I> {
    out: O,
    err: E,
    input: I,
    assume_yes: bool,
}

impl TerminalView<Stdout, Stderr, StdinLock<'static>> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), io::stdin().lock(), assume_yes)
    }
}

impl<O: Write, E: Write, I: BufRead> TerminalView<O, E, I> {
    pub fn new(out: O, err: E, input: I, assume_yes: bool) -> Self {
        Self {
            out,
            err,
            input,
            assume_yes,
        }
    }
}

impl<O: Write, E: Write, I: BufRead> CatalogView for TerminalView<O, E, I> {
    fn replace_rows(&mut self, rows: Vec<BookRow>) {
        if rows.is_empty() {
            let _ = writeln!(self.out, "No books.");
            return;
        }
        let rows: Vec<RowDisplay> = rows.into_iter().map(RowDisplay::from).collect();
        let table = Table::new(&rows).with(Style::rounded()).to_string();
        let _ = writeln!(self.out, "{table}");
    }

    fn show_form(&mut self, form: &BookForm) {
        tracing::debug!(
            id = %form.id_field(),
            title = %form.title,
            author = %form.author,
            isbn = %form.isbn,
            "form updated"
        );
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let _ = write!(self.err, "{prompt} [y/N] ");
        let _ = self.err.flush();

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.err, "error: {message}");
    }
}
