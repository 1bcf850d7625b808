//! Interactive numbered menu, used when no subcommand is given.
//!
//! Mirrors the classic single-user flow: print the menu, read a choice,
//! prompt for the fields the chosen action needs, repeat until exit.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelfmark_catalog::{STATUS_CHECKED_OUT, STATUS_IN_STOCK};
use shelfmark_store::CatalogStore;

use crate::error::CliError;

pub(crate) fn run(store: &CatalogStore) -> Result<(), CliError> {
    loop {
        println!();
        println!("1. Add a book");
        println!("2. Remove a book");
        println!("3. Search the catalog");
        println!("4. List all books");
        println!("5. Change a book's status");
        println!("6. Exit");

        let Some(choice) = prompt("Choose an action")? else {
            // EOF on stdin — treat like exit
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = prompt("Title")? else {
                    return Ok(());
                };
                let Some(author) = prompt("Author")? else {
                    return Ok(());
                };
                let Some(year) = prompt_year()? else {
                    return Ok(());
                };
                crate::run_add(store, &title, &author, year)?;
            }
            "2" => {
                let Some(id) = prompt("ID of the book to remove")? else {
                    return Ok(());
                };
                crate::run_remove(store, &id)?;
            }
            "3" => {
                let Some(query) = prompt("Author, title, or year")? else {
                    return Ok(());
                };
                crate::run_search(store, &query)?;
            }
            "4" => crate::run_list(store)?,
            "5" => {
                let Some(id) = prompt("ID of the book to update")? else {
                    return Ok(());
                };
                let Some(status) =
                    prompt(&format!("New status (e.g. \"{STATUS_IN_STOCK}\" or \"{STATUS_CHECKED_OUT}\")"))?
                else {
                    return Ok(());
                };
                crate::run_status(store, &id, &status)?;
            }
            "6" => {
                println!("Bye.");
                return Ok(());
            }
            other => {
                println!(
                    "{} Unknown choice \"{}\", try again",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    other,
                );
            }
        }
    }
}

/// Print a prompt and read one trimmed line from stdin. Returns None on EOF.
fn prompt(label: &str) -> Result<Option<String>, CliError> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompt for a publication year until the input parses as an integer.
fn prompt_year() -> Result<Option<i64>, CliError> {
    loop {
        let Some(line) = prompt("Publication year")? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(year) => return Ok(Some(year)),
            Err(_) => {
                println!(
                    "  {}",
                    "Enter a whole number.".if_supports_color(Stdout, |t| t.yellow()),
                );
            }
        }
    }
}
