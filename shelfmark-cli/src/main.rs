//! shelfmark CLI
//!
//! Command-line interface for the book catalog. Each store operation is
//! exposed as a subcommand; running with no subcommand starts the
//! interactive numbered menu.

mod error;
mod menu;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelfmark_catalog::Book;
use shelfmark_store::CatalogStore;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(about = "Manage a book catalog stored in a JSON file", long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(short, long, global = true, default_value = "library.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// Publication year
        year: i64,
    },

    /// Remove a book by ID
    Remove {
        /// ID of the book to remove
        id: String,
    },

    /// Search by author, title, or publication year
    Search {
        /// Author or title (exact, case-insensitive) or a year
        query: String,
    },

    /// List every book in the catalog
    List,

    /// Change the status of a book
    Status {
        /// ID of the book to update
        id: String,

        /// New status (conventionally "in stock" or "checked out")
        new_status: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let store = CatalogStore::new(&cli.file);

    let result = match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => run_add(&store, &title, &author, year),
        Some(Commands::Remove { id }) => run_remove(&store, &id),
        Some(Commands::Search { query }) => run_search(&store, &query),
        Some(Commands::List) => run_list(&store),
        Some(Commands::Status { id, new_status }) => run_status(&store, &id, &new_status),
        None => menu::run(&store),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

/// Run the add command.
fn run_add(store: &CatalogStore, title: &str, author: &str, year: i64) -> Result<(), CliError> {
    let id = store.add_book(title, author, year)?;
    println!(
        "{} Added \"{}\" with ID {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        title,
        id.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

/// Run the remove command.
fn run_remove(store: &CatalogStore, id: &str) -> Result<(), CliError> {
    if store.remove_book(id)? {
        println!(
            "{} Removed book {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            id.if_supports_color(Stdout, |t| t.bold()),
        );
    } else {
        println!(
            "{} No book with ID {}",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            id,
        );
    }
    Ok(())
}

/// Run the search command.
fn run_search(store: &CatalogStore, query: &str) -> Result<(), CliError> {
    let results = store.search(query)?;
    if results.is_empty() {
        println!(
            "{}",
            "No matching books.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for (id, book) in &results {
        print_book(id, book);
    }
    Ok(())
}

/// Run the list command.
fn run_list(store: &CatalogStore) -> Result<(), CliError> {
    let books = store.list_books()?;
    if books.is_empty() {
        println!(
            "{}",
            "The catalog is empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for (id, book) in &books {
        print_book(id, book);
    }

    let stats = store.catalog_stats()?;
    let breakdown: Vec<String> = stats
        .by_status
        .iter()
        .map(|(status, count)| format!("{count} {status}"))
        .collect();
    println!(
        "{}",
        format!("Total: {} books ({})", stats.total, breakdown.join(", "))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

/// Run the status command.
fn run_status(store: &CatalogStore, id: &str, new_status: &str) -> Result<(), CliError> {
    if store.change_status(id, new_status)? {
        println!(
            "{} Book {} is now \"{}\"",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            id.if_supports_color(Stdout, |t| t.bold()),
            new_status,
        );
    } else {
        println!(
            "{} No book with ID {}",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            id,
        );
    }
    Ok(())
}

/// Print one book record.
fn print_book(id: &str, book: &Book) {
    println!();
    println!(
        "{} {}",
        "ID:".if_supports_color(Stdout, |t| t.cyan()),
        id.if_supports_color(Stdout, |t| t.bold()),
    );
    println!(
        "  {}   {}",
        "Title:".if_supports_color(Stdout, |t| t.cyan()),
        book.title,
    );
    println!(
        "  {}  {}",
        "Author:".if_supports_color(Stdout, |t| t.cyan()),
        book.author,
    );
    println!(
        "  {}    {}",
        "Year:".if_supports_color(Stdout, |t| t.cyan()),
        book.year,
    );
    println!(
        "  {}  {}",
        "Status:".if_supports_color(Stdout, |t| t.cyan()),
        book.status,
    );
}
