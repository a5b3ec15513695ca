//! Integration tests for the catalog, store and library
//!
//! These tests verify the externally observable behavior against real files:
//! - Missing and malformed files load as an empty catalog
//! - Added books survive a fresh load, appended at the end
//! - Removal is case-insensitive and leaves the file untouched on not-found
//! - Search and statistics results

use shelftui::{Book, Catalog, Library, LoadOutcome, SearchField, Store};
use std::fs;
use tempfile::TempDir;

fn library_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("library.json")
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_nonexistent_file_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let (catalog, outcome) = Store::new(library_path(&dir)).load();
    assert!(catalog.is_empty());
    assert_eq!(outcome, LoadOutcome::Missing);
}

#[test]
fn test_load_malformed_file_yields_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);

    for content in ["", "not json at all", "[{\"title\": \"Dune\"}]", "[1, 2, 3]"] {
        fs::write(&path, content).unwrap();
        let (catalog, outcome) = Store::new(&path).load();
        assert!(catalog.is_empty(), "content {:?} should load empty", content);
        assert!(
            matches!(outcome, LoadOutcome::Malformed(_)),
            "content {:?} should be tagged malformed",
            content
        );
    }
}

#[test]
fn test_load_reads_original_file_format() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    fs::write(
        &path,
        r#"[
    {
        "title": "Dune",
        "author": "Frank Herbert",
        "year": 1965,
        "genre": "Science Fiction",
        "read": true
    }
]"#,
    )
    .unwrap();

    let (catalog, outcome) = Store::new(&path).load();
    assert!(outcome.is_loaded());
    assert_eq!(
        catalog.books(),
        &[Book::new("Dune", "Frank Herbert", 1965, "Science Fiction", true)]
    );
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_then_fresh_load_appends_at_end() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);

    let mut library = Library::open(Store::new(&path));
    library
        .add(Book::new("Emma", "Jane Austen", 1815, "Novel", false))
        .unwrap();
    let added = Book::new("Dune", "Frank Herbert", 1965, "Science Fiction", true);
    library.add(added.clone()).unwrap();
    drop(library);

    let reopened = Library::open(Store::new(&path));
    assert_eq!(reopened.books().len(), 2);
    assert_eq!(reopened.books().last(), Some(&added));
}

#[test]
fn test_add_permits_duplicates_and_any_year() {
    let dir = TempDir::new().unwrap();
    let mut library = Library::open(Store::new(library_path(&dir)));
    let book = Book::new("Dune", "Frank Herbert", 3000, "SF", false);
    library.add(book.clone()).unwrap();
    library.add(book).unwrap();
    assert_eq!(library.books().len(), 2);
    assert_eq!(library.books()[0].year, 3000);
}

#[cfg(unix)]
#[test]
fn test_add_through_symlink_keeps_link_and_mode() {
    use std::os::unix::fs::PermissionsExt;
    let dir = TempDir::new().unwrap();
    let real = dir.path().join("real.json");
    let link = library_path(&dir);
    fs::write(&real, "[]").unwrap();
    fs::set_permissions(&real, fs::Permissions::from_mode(0o644)).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut library = Library::open(Store::new(&link));
    library
        .add(Book::new("Dune", "Frank Herbert", 1965, "SF", true))
        .unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    let mode = fs::metadata(&real).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    let (on_disk, _) = Store::new(&real).load();
    assert_eq!(on_disk.books()[0].title, "Dune");
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn test_remove_deletes_all_case_variants() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    let mut library = Library::open(Store::new(&path));
    library
        .add(Book::new("Dune", "Frank Herbert", 1965, "SF", true))
        .unwrap();
    library
        .add(Book::new("Emma", "Jane Austen", 1815, "Novel", false))
        .unwrap();
    library
        .add(Book::new("dune", "Frank Herbert", 1965, "SF", false))
        .unwrap();

    assert_eq!(library.remove("Dune").unwrap(), 2);
    assert_eq!(library.books().len(), 1);

    let (on_disk, _) = Store::new(&path).load();
    assert_eq!(on_disk.books()[0].title, "Emma");
}

#[test]
fn test_remove_absent_title_leaves_file_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    let mut library = Library::open(Store::new(&path));
    library
        .add(Book::new("Dune", "Frank Herbert", 1965, "SF", true))
        .unwrap();
    let before = fs::read(&path).unwrap();

    let err = library.remove("The Hobbit").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_remove_on_missing_file_does_not_create_it() {
    let dir = TempDir::new().unwrap();
    let path = library_path(&dir);
    let mut library = Library::open(Store::new(&path));
    assert!(library.remove("Dune").is_err());
    assert!(!path.exists());
}

// =============================================================================
// Search & statistics
// =============================================================================

#[test]
fn test_search_by_author() {
    let catalog = Catalog::from(vec![
        Book::new("To Kill a Mockingbird", "Harper Lee", 1960, "Fiction", true),
        Book::new("Harry Potter", "J.K. Rowling", 1997, "Fantasy", false),
    ]);
    let hits = catalog.search("har", SearchField::Author);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].author, "Harper Lee");

    // The same query by title hits the other record
    let hits = catalog.search("har", SearchField::Title);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Harry Potter");
}

#[test]
fn test_statistics_empty_catalog() {
    let stats = Catalog::new().statistics();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.formatted_percentage(), "0.00");
}

#[test]
fn test_statistics_one_of_three_read() {
    let catalog = Catalog::from(vec![
        Book::new("A", "X", 2000, "G", true),
        Book::new("B", "Y", 2001, "G", false),
        Book::new("C", "Z", 2002, "G", false),
    ]);
    let stats = catalog.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.formatted_percentage(), "33.33");
}
