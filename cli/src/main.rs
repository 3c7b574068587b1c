//! `catalog`: list and edit the book catalog from a terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use catalog_core::{BookClient, BookId, CatalogClient, ClientSettings, DeleteOutcome, UreqTransport};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod view;

use view::TerminalView;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "catalog", about = "List, add, edit, and delete books", version)]
struct Cli {
    /// Collection service base URL; overrides settings and CATALOG_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Settings file (defaults to an optional ./catalog.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every book
    List,
    /// Create a new book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        isbn: String,
    },
    /// Load a book, change the given fields, and save it
    Edit {
        id: BookId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        isbn: Option<String>,
    },
    /// Delete a book after confirmation
    Delete {
        id: BookId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = ClientSettings::load(cli.config.as_deref())
        .context("failed to load client settings")?;
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }
    tracing::debug!(base_url = %settings.base_url, "catalog client starting");

    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let mut catalog = CatalogClient::new(
        BookClient::new(&settings.base_url),
        UreqTransport::new(),
        TerminalView::stdio(assume_yes),
    );

    match cli.command {
        Command::List => {
            catalog.list().context("failed to list books")?;
        }
        Command::Add {
            title,
            author,
            isbn,
        } => {
            let form = catalog.form_mut();
            form.title = title;
            form.author = author;
            form.isbn = isbn;
            catalog.save().context("failed to create book")?;
        }
        Command::Edit {
            id,
            title,
            author,
            isbn,
        } => {
            catalog
                .edit(id)
                .with_context(|| format!("failed to load book {id}"))?;
            let form = catalog.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(author) = author {
                form.author = author;
            }
            if let Some(isbn) = isbn {
                form.isbn = isbn;
            }
            catalog
                .save()
                .with_context(|| format!("failed to update book {id}"))?;
        }
        Command::Delete { id, .. } => {
            let outcome = catalog
                .delete(id)
                .with_context(|| format!("failed to delete book {id}"))?;
            if let DeleteOutcome::Rejected { status } = outcome {
                bail!("server refused to delete book {id} (HTTP {status})");
            }
        }
    }

    Ok(())
}
