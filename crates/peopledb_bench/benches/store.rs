//! Store operation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use peopledb_bench::utils::{random_rows, random_store};
use peopledb_core::{load, save, PeopleStore, SortField, SortOrder};
use tempfile::TempDir;

/// Benchmark inserting into a store that starts at the default capacity.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let rows = random_rows(count);
            b.iter(|| {
                let mut store = PeopleStore::new().unwrap();
                for (name, age, weight) in &rows {
                    store.insert(name, *age, *weight).unwrap();
                }
                black_box(store);
            });
        });
    }
    group.finish();
}

/// Benchmark removing from the front, the worst case for shifting.
fn bench_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_front");

    for count in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter_batched(
                || random_store(count),
                |mut store| {
                    while store.remove(0).is_some() {}
                    black_box(store);
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark the bubble sort for each field.
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for field in SortField::ALL {
        for count in [10, 100, 500].iter() {
            group.bench_with_input(
                BenchmarkId::new(field.as_str(), count),
                count,
                |b, &count| {
                    b.iter_batched(
                        || random_store(count),
                        |mut store| {
                            store.sort_by_field(field, SortOrder::Ascending);
                            black_box(store);
                        },
                        criterion::BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

/// Benchmark saving and loading a data file.
fn bench_persist(c: &mut Criterion) {
    let mut group = c.benchmark_group("persist");
    let dir = TempDir::new().unwrap();

    for count in [100, 1000, 10000].iter() {
        let path = dir.path().join(format!("people_{count}.csv"));
        let store = random_store(*count);
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("save", count), count, |b, _| {
            b.iter(|| save(black_box(&store), &path).unwrap());
        });

        save(&store, &path).unwrap();
        group.bench_with_input(BenchmarkId::new("load", count), count, |b, _| {
            b.iter(|| black_box(load(&path).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_remove_front, bench_sort, bench_persist);
criterion_main!(benches);
