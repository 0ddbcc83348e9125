use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bookshelf::{book::Book, core::shelf::Shelf, persist::NullSink};

fn filled(n: u32) -> Shelf {
    let mut shelf = Shelf::with_sink(NullSink);
    for i in 0..n {
        let year = 2000 - (i % 500) as i32;
        let _ = shelf.add(Book::new(format!("Title {i}"), format!("Author {}", n - i), year));
    }
    shelf
}

fn bench_adds(c: &mut Criterion) {
    c.bench_function("shelf_add_10k", |b| {
        b.iter(|| filled(10_000));
    });
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_10k");
    for criteria in ["title", "author", "year"] {
        group.bench_with_input(BenchmarkId::from_parameter(criteria), &criteria, |b, criteria| {
            b.iter_batched(
                || filled(10_000),
                |mut shelf| shelf.sort_books_by(criteria),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let shelf = filled(10_000);
    c.bench_function("find_last_title_10k", |b| {
        b.iter(|| shelf.find_book_by_title("Title 9999"));
    });
}

criterion_group!(benches, bench_adds, bench_sorts, bench_lookup);
criterion_main!(benches);
