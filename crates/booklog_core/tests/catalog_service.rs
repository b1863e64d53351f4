use booklog_core::{
    BookPatch, CatalogConfig, CatalogError, CatalogService, NewBook, Outcome, RepoError,
    UpdateRequest,
};
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, CatalogService) {
    let dir = tempfile::tempdir().unwrap();
    let service = CatalogService::new(CatalogConfig::new(dir.path().join("test_library.db")));
    service.initialize().unwrap();
    (dir, service)
}

fn insert_direct(path: &Path, title: &str, author: &str, year: i64) {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3);",
        rusqlite::params![title, author, year],
    )
    .unwrap();
}

fn done(outcome: Outcome) -> String {
    match outcome {
        Outcome::Done(text) => text,
        Outcome::Cancelled => panic!("operation was unexpectedly cancelled"),
    }
}

#[test]
fn initialize_is_idempotent_and_preserves_records() {
    let (_dir, service) = setup();
    service.add_book(&NewBook::new("Keep", "Me", 2000)).unwrap();

    service.initialize().unwrap();
    service.initialize().unwrap();

    assert_eq!(service.list_books().unwrap().len(), 1);
}

#[test]
fn add_then_list_shows_record_and_report_total_grows() {
    let (_dir, service) = setup();
    let before = service.report_stats().unwrap().total;

    let outcome = service
        .add(Some(NewBook::new("Test Book", "Test Author", 2021)))
        .unwrap();
    assert_eq!(done(outcome), "Book 'Test Book' added successfully.");

    let listing = service.list().unwrap();
    let books = service.list_books().unwrap();
    let book = &books[0];
    assert!(listing.contains(&format!(
        "ID: {}, Title: Test Book, Author: Test Author, Year: 2021",
        book.id
    )));
    assert_eq!(service.report_stats().unwrap().total, before + 1);
}

#[test]
fn add_cancelled_does_not_mutate() {
    let (_dir, service) = setup();
    assert_eq!(service.add(None).unwrap(), Outcome::Cancelled);
    assert_eq!(service.list().unwrap(), "The library is empty.");
}

#[test]
fn remove_twice_reports_success_both_times() {
    let (dir, service) = setup();
    insert_direct(&dir.path().join("test_library.db"), "Book1", "Author1", 2021);

    assert_eq!(done(service.remove(Some(1)).unwrap()), "Book removed successfully.");
    assert!(service.get_book(1).unwrap().is_none());
    assert_eq!(done(service.remove(Some(1)).unwrap()), "Book removed successfully.");

    assert_eq!(service.remove_book(1).unwrap(), 0);
    assert_eq!(service.remove(None).unwrap(), Outcome::Cancelled);
}

#[test]
fn search_returns_exact_line_or_notice() {
    let (dir, service) = setup();
    insert_direct(&dir.path().join("test_library.db"), "Book1", "Author1", 2021);

    assert_eq!(
        done(service.search(Some("Book1".to_string())).unwrap()),
        "ID: 1, Title: Book1, Author: Author1, Year: 2021"
    );
    assert_eq!(
        done(service.search(Some("nonexistent".to_string())).unwrap()),
        "No books found."
    );
    assert_eq!(service.search(None).unwrap(), Outcome::Cancelled);
}

#[test]
fn update_replaces_all_fields() {
    let (dir, service) = setup();
    insert_direct(&dir.path().join("test_library.db"), "Book1", "Author1", 2021);

    let request = UpdateRequest {
        id: 1,
        patch: BookPatch {
            title: Some("Updated Book".to_string()),
            author: Some("Updated Author".to_string()),
            year: Some(2022),
        },
    };
    assert_eq!(
        done(service.update(Some(request)).unwrap()),
        "Book updated successfully."
    );

    let book = service.get_book(1).unwrap().unwrap();
    assert_eq!(book.title, "Updated Book");
    assert_eq!(book.author, "Updated Author");
    assert_eq!(book.year, 2022);
}

#[test]
fn blank_update_leaves_record_unchanged() {
    let (dir, service) = setup();
    insert_direct(&dir.path().join("test_library.db"), "Book1", "Author1", 2021);

    let request = UpdateRequest {
        id: 1,
        patch: BookPatch {
            title: Some(String::new()),
            author: Some("   ".to_string()),
            year: None,
        },
    };
    service.update(Some(request)).unwrap();

    let book = service.get_book(1).unwrap().unwrap();
    assert_eq!(book.title, "Book1");
    assert_eq!(book.author, "Author1");
    assert_eq!(book.year, 2021);
}

#[test]
fn update_missing_id_is_silent_success() {
    let (_dir, service) = setup();
    let request = UpdateRequest {
        id: 99,
        patch: BookPatch {
            year: Some(1900),
            ..BookPatch::default()
        },
    };

    assert_eq!(service.update_book(&request).unwrap(), 0);
    assert_eq!(
        done(service.update(Some(request)).unwrap()),
        "Book updated successfully."
    );
    assert_eq!(service.update(None).unwrap(), Outcome::Cancelled);
}

#[test]
fn report_renders_totals_and_groups() {
    let (dir, service) = setup();
    let path = dir.path().join("test_library.db");
    insert_direct(&path, "Book1", "Author1", 2021);
    insert_direct(&path, "Book2", "Author1", 2022);
    insert_direct(&path, "Book3", "Author2", 2021);

    let report = service.report().unwrap();
    assert!(report.contains("Total Books: 3"));
    assert!(report.contains("Author1: 2"));
    assert!(report.contains("Author2: 1"));
    assert!(report.contains("2021: 2"));
    assert!(report.contains("2022: 1"));
    assert_eq!(
        report,
        "Total Books: 3\n\nBooks by Author:\nAuthor1: 2\nAuthor2: 1\n\nBooks by Year:\n2021: 2\n2022: 1\n"
    );
}

#[test]
fn empty_store_list_and_report() {
    let (_dir, service) = setup();
    assert_eq!(service.list().unwrap(), "The library is empty.");
    assert_eq!(
        service.report().unwrap(),
        "Total Books: 0\n\nBooks by Author:\n\nBooks by Year:\n"
    );
}

#[test]
fn unreachable_store_propagates_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let service = CatalogService::new(CatalogConfig::new(
        dir.path().join("no-such-dir").join("library.db"),
    ));

    let err = service.list().unwrap_err();
    assert!(matches!(err, CatalogError::Db(_)));
    assert!(service.initialize().is_err());
}

#[test]
fn blank_update_on_existing_id_still_counts_as_matched() {
    let (_dir, service) = setup();
    let id = service.add_book(&NewBook::new("B", "A", 2021)).unwrap();

    let blank = UpdateRequest {
        id,
        patch: BookPatch {
            title: Some(String::new()),
            ..BookPatch::default()
        },
    };
    assert_eq!(service.update_book(&blank).unwrap(), 1);

    let missing = UpdateRequest {
        id: id + 100,
        patch: BookPatch::default(),
    };
    assert_eq!(service.update_book(&missing).unwrap(), 0);
}

#[test]
fn whitespace_search_is_cancelled_like_absent_input() {
    let (_dir, service) = setup();
    service.add_book(&NewBook::new("The Hobbit", "Tolkien", 1937)).unwrap();

    assert_eq!(service.search(Some(" ".to_string())).unwrap(), Outcome::Cancelled);
    assert_eq!(service.search(Some(String::new())).unwrap(), Outcome::Cancelled);
}

#[test]
fn add_with_blank_title_is_a_validation_error() {
    let (_dir, service) = setup();

    let err = service.add(Some(NewBook::new("", "A", 1))).unwrap_err();
    assert!(matches!(err, CatalogError::Repo(RepoError::Validation(_))));
    assert_eq!(service.list().unwrap(), "The library is empty.");
}
