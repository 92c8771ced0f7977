//! Catalog benchmarks.
//!
//! These measure the operations that dominate script processing: keyed
//! inserts and removals against the red-black index, point lookups, range
//! scans, the path-following closest lookup, and the lending hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shelfdb::{Availability, BookId, LibraryCatalog, PatronId};

/// A fixed permutation of `0..count` (7919 is prime, so the stride walks
/// every residue for the counts used here).
fn scattered_ids(count: u32) -> Vec<u32> {
    (0..count).map(|i| (i * 7919) % count).collect()
}

fn filled_catalog(count: u32) -> LibraryCatalog {
    let mut catalog = LibraryCatalog::new();
    for id in scattered_ids(count) {
        catalog
            .insert_book(
                BookId::new(id),
                format!("title {}", id),
                format!("author {}", id),
                Availability::Available,
            )
            .unwrap();
    }
    catalog
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_insert");

    for count in [100u32, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("sequential", count), count, |b, &count| {
            b.iter(|| {
                let mut catalog = LibraryCatalog::new();
                for id in 0..count {
                    catalog
                        .insert_book(
                            BookId::new(id),
                            format!("title {}", id),
                            format!("author {}", id),
                            Availability::Available,
                        )
                        .unwrap();
                }
                catalog
            });
        });

        group.bench_with_input(BenchmarkId::new("scattered", count), count, |b, &count| {
            b.iter_with_setup(
                || scattered_ids(count),
                |ids| {
                    let mut catalog = LibraryCatalog::new();
                    for id in ids {
                        catalog
                            .insert_book(
                                BookId::new(id),
                                format!("title {}", id),
                                format!("author {}", id),
                                Availability::Available,
                            )
                            .unwrap();
                    }
                    catalog
                },
            );
        });
    }

    group.finish();
}

fn bench_point_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lookup");

    for count in [100u32, 1000].iter() {
        let catalog = filled_catalog(*count);
        let mid = BookId::new(count / 2);
        let absent = BookId::new(*count + 1);

        group.bench_with_input(BenchmarkId::new("existing", count), count, |b, _| {
            b.iter(|| catalog.book(black_box(mid)));
        });
        group.bench_with_input(BenchmarkId::new("absent", count), count, |b, _| {
            b.iter(|| catalog.book(black_box(absent)));
        });
    }

    group.finish();
}

fn bench_range_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_range");

    for count in [100u32, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        let catalog = filled_catalog(*count);
        let hi = BookId::new(*count);

        group.bench_with_input(BenchmarkId::new("full", count), count, |b, _| {
            b.iter(|| catalog.books_in_range(black_box(BookId::new(0)), black_box(hi)));
        });
    }

    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_nearest");

    // Even keys only, so odd targets always tie two neighbors.
    let mut catalog = LibraryCatalog::new();
    for id in (0..2000u32).step_by(2) {
        catalog
            .insert_book(
                BookId::new(id),
                format!("title {}", id),
                format!("author {}", id),
                Availability::Available,
            )
            .unwrap();
    }

    group.bench_function("tie_pair", |b| {
        b.iter(|| catalog.nearest_books(black_box(BookId::new(999))));
    });
    group.bench_function("exact", |b| {
        b.iter(|| catalog.nearest_books(black_box(BookId::new(1000))));
    });

    group.finish();
}

fn bench_lending_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_lending");

    // One borrow, five reservations, six returns: the catalog ends each
    // iteration back on the shelf.
    group.bench_function("borrow_reserve_return", |b| {
        let mut catalog = filled_catalog(1);
        let id = BookId::new(0);

        b.iter(|| {
            catalog.borrow_book(PatronId::new(100), id, 1);
            for patron in 0..5u32 {
                catalog.borrow_book(PatronId::new(patron), id, 5 - patron);
            }
            let mut holder = PatronId::new(100);
            loop {
                match catalog.return_book(holder, id) {
                    shelfdb::ReturnOutcome::ReturnedWithSuccessor(next) => holder = next,
                    _ => break,
                }
            }
        });
    });

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_delete");

    for count in [100u32, 500].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("scattered", count), count, |b, &count| {
            b.iter_with_setup(
                || filled_catalog(count),
                |mut catalog| {
                    for id in scattered_ids(count) {
                        catalog.delete_book(BookId::new(id)).unwrap();
                    }
                    catalog
                },
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_point_lookup,
    bench_range_scan,
    bench_nearest,
    bench_lending_cycle,
    bench_delete,
);
criterion_main!(benches);
