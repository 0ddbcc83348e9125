use anyhow::Result;
use tracing_subscriber::{EnvFilter, prelude::*};

use bookshelf::{book::Book, core::shelf::Shelf};

fn main() -> Result<()> {
    init_logging()?;

    let mut shelf = Shelf::new();

    let books = [
        Book::with_genre("1984", "George Orwell", 1949, "Dystopian"),
        Book::with_genre("To Kill a Mockingbird", "Harper Lee", 1960, "Fiction"),
        Book::with_genre("Brave New World", "Aldous Huxley", 1932, "Science Fiction"),
    ];
    for book in &books {
        let _ = shelf.add(book.clone());
    }

    println!("All books in library:");
    shelf.list_books();

    shelf.sort_books_by("author");
    println!("\nBooks sorted by author:");
    shelf.list_books();

    let _ = shelf.remove_book("1984");
    println!("\nAfter removing '1984':");
    shelf.list_books();

    let author = "Harper Lee";
    println!("Books by {author}:");
    for book in shelf.find_all_by_author(author) {
        book.display();
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
