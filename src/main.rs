use libcatalog::{
    book::Book,
    core::library::Library,
    error::CatalogResult,
    person::{Member, Staff},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> CatalogResult<()> {
    init_tracing();

    let mut library = Library::new();
    let librarian = Staff::new("Stew", "S-001");

    let novel = Book::fiction("The real one", "F. Bomb", "12345");
    let essay = Book::non_fiction("Not Again, Wake up.", "Yikes Mink", "67890");
    librarian.register_book(&mut library, novel);
    librarian.register_book(&mut library, essay);
    librarian.register_member(&mut library, Member::new("Jordan", "M-001"));
    library.add_staff(librarian);

    library.print_books()?;
    library.print_members()?;
    library.print_staff()?;
    Ok(())
}
