use libcatalog::{
    book::Book,
    config::LibraryConfig,
    core::{library::Library, listing::Describe},
    error::CatalogError,
    events::CatalogEvent,
    types::Genre,
};

fn journaled() -> Library {
    Library::with_config(LibraryConfig {
        record_events: true,
        ..LibraryConfig::default()
    })
}

#[test]
fn new_book_keeps_fields_and_is_on_shelf() {
    let book = Book::new(Genre::NonFiction, " Spaced ", "Author", "isbn?");

    assert_eq!(book.genre(), Genre::NonFiction);
    assert_eq!(book.title(), " Spaced ");
    assert_eq!(book.author(), "Author");
    assert_eq!(book.isbn(), "isbn?");
    assert!(!book.is_checked_out());
}

#[test]
fn check_out_then_return_restores_flag() {
    let mut book = Book::fiction("Dune", "Herbert", "1");

    book.check_out();
    assert!(book.is_checked_out());
    book.return_book();
    assert!(!book.is_checked_out());
}

#[test]
fn double_check_out_stays_checked_out() {
    let mut book = Book::fiction("Dune", "Herbert", "1");

    book.check_out();
    book.check_out();
    assert!(book.is_checked_out());

    book.return_book();
    book.return_book();
    assert!(!book.is_checked_out());
}

#[test]
fn describe_is_stable_across_calls_and_checkout() {
    let mut book = Book::non_fiction("Cosmos", "Sagan", "2");
    let first = book.describe();

    assert_eq!(book.describe(), first);
    book.check_out();
    assert_eq!(book.describe(), first);
    assert_eq!(first, "Non-Fiction Book: Cosmos by Sagan");
}

#[test]
fn library_toggles_owned_book_through_handle() {
    let mut library = Library::new();
    library.add_book(Book::fiction("First", "A", "1"));
    let handle = library.add_book(Book::fiction("Second", "B", "2"));

    library.check_out(handle).unwrap();
    assert!(library.book(handle).unwrap().is_checked_out());
    assert!(!library.book(0).unwrap().is_checked_out());

    library.return_book(handle).unwrap();
    assert!(!library.book(handle).unwrap().is_checked_out());
}

#[test]
fn unknown_handle_is_reported() {
    let mut library = journaled();
    library.add_book(Book::fiction("Only", "One", "1"));
    library.drain_events();

    assert!(matches!(
        library.check_out(5),
        Err(CatalogError::MissingBook(5))
    ));
    assert!(matches!(
        library.return_book(1),
        Err(CatalogError::MissingBook(1))
    ));
    assert!(library.drain_events().is_empty());
}

#[test]
fn checkout_events_follow_operation_order() {
    let mut library = journaled();
    let handle = library.add_book(Book::fiction("Dune", "Herbert", "1"));
    library.check_out(handle).unwrap();
    library.return_book(handle).unwrap();

    assert_eq!(
        library.drain_events(),
        vec![
            CatalogEvent::BookAdded { handle },
            CatalogEvent::BookCheckedOut { handle },
            CatalogEvent::BookReturned { handle },
        ]
    );
    assert!(library.drain_events().is_empty());
}
