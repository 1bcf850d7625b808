use std::fs;

use shelfmark_catalog::{STATUS_CHECKED_OUT, STATUS_IN_STOCK};
use shelfmark_store::CatalogStore;
use tempfile::TempDir;

fn test_store(tmp: &TempDir) -> CatalogStore {
    CatalogStore::new(tmp.path().join("library.json"))
}

#[test]
fn ids_are_assigned_sequentially() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    assert_eq!(store.add_book("Dune", "Frank Herbert", 1965).unwrap(), "1");
    assert_eq!(store.add_book("Emma", "Jane Austen", 1815).unwrap(), "2");
}

#[test]
fn removing_the_highest_id_frees_it_for_reuse() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    store.add_book("Emma", "Jane Austen", 1815).unwrap();

    assert!(store.remove_book("2").unwrap());
    // Max remaining ID is 1, so the next add reassigns "2", not "3".
    assert_eq!(store.add_book("Ulysses", "James Joyce", 1922).unwrap(), "2");
}

#[test]
fn added_books_default_to_in_stock() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    let id = store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    let books = store.list_books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].0, id);
    assert_eq!(books[0].1.status, STATUS_IN_STOCK);
}

#[test]
fn empty_title_and_author_are_accepted() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    let id = store.add_book("", "", 0).unwrap();
    let books = store.list_books().unwrap();
    assert_eq!(books[0].0, id);
    assert_eq!(books[0].1.title, "");
    assert_eq!(books[0].1.author, "");
}

#[test]
fn remove_existing_book_returns_true_and_deletes() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    let id = store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    assert!(store.remove_book(&id).unwrap());
    assert!(store.list_books().unwrap().is_empty());
}

#[test]
fn remove_nonexistent_book_returns_false_and_leaves_file_alone() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    assert!(!store.remove_book("99").unwrap());
    let after = fs::read_to_string(store.path()).unwrap();
    assert_eq!(after, before);
}

#[test]
fn change_status_finds_entries_anywhere_in_the_catalog() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    store.add_book("Emma", "Jane Austen", 1815).unwrap();
    store.add_book("Ulysses", "James Joyce", 1922).unwrap();

    // "3" is not the first entry; the scan must not fail fast.
    assert!(store.change_status("3", STATUS_CHECKED_OUT).unwrap());

    let books = store.list_books().unwrap();
    assert_eq!(books[2].1.status, STATUS_CHECKED_OUT);
    // Only the targeted record changed.
    assert_eq!(books[0].1.status, STATUS_IN_STOCK);
    assert_eq!(books[1].1.status, STATUS_IN_STOCK);
}

#[test]
fn change_status_on_missing_id_returns_false_without_writing() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    assert!(!store.change_status("42", STATUS_CHECKED_OUT).unwrap());
    let after = fs::read_to_string(store.path()).unwrap();
    assert_eq!(after, before);
}

#[test]
fn change_status_accepts_arbitrary_strings() {
    let tmp = TempDir::new().unwrap();
    let store = test_store(&tmp);

    let id = store.add_book("Dune", "Frank Herbert", 1965).unwrap();
    assert!(store.change_status(&id, "on loan to dave").unwrap());
    let books = store.list_books().unwrap();
    assert_eq!(books[0].1.status, "on loan to dave");
}

#[test]
fn operations_are_durable_across_store_handles() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("library.json");

    let id = CatalogStore::new(&path)
        .add_book("Dune", "Frank Herbert", 1965)
        .unwrap();

    // A fresh handle over the same file sees the write.
    let reopened = CatalogStore::new(&path);
    let books = reopened.list_books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].0, id);
    assert_eq!(books[0].1.title, "Dune");
}
