//! Benchmarks for recstore core operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recstore::{OrderedIndex, Record, RecordPage};

fn index_benchmarks(c: &mut Criterion) {
    c.bench_function("index_insert_1k_shuffled", |b| {
        // Deterministic shuffle: stride through the key space
        let keys: Vec<i64> = (0..1_000).map(|i| (i * 577) % 1_000).collect();
        b.iter(|| {
            let mut index = OrderedIndex::default();
            for &key in &keys {
                index.insert(black_box(key), "rid");
            }
            index
        });
    });

    c.bench_function("index_batch_insert_1k", |b| {
        let pairs: Vec<(i64, String)> = (0..1_000).map(|k| (k, k.to_string())).collect();
        b.iter(|| {
            let mut index = OrderedIndex::default();
            index.batch_insert(black_box(pairs.clone())).unwrap();
            index
        });
    });

    let mut index = OrderedIndex::default();
    for key in 0..10_000 {
        index.insert(key, key.to_string());
    }

    c.bench_function("index_get", |b| {
        b.iter(|| index.get(black_box(7_777)).unwrap().len());
    });

    c.bench_function("index_range_query_100", |b| {
        b.iter(|| index.range_query(black_box(5_000), black_box(5_100)).len());
    });
}

fn page_benchmarks(c: &mut Criterion) {
    c.bench_function("page_write_to_capacity", |b| {
        b.iter(|| {
            let mut page = RecordPage::default();
            for rid in 0..512u64 {
                page.write(Record::new(None, rid, 0, 0, vec![1, 2, 3, 4]));
            }
            page
        });
    });

    let mut page = RecordPage::default();
    for rid in 0..512u64 {
        page.write(Record::new(None, rid, 0, 0, vec![1, 2, 3, 4]));
    }

    c.bench_function("page_read_index", |b| {
        b.iter(|| page.read_index(black_box(300)).unwrap().rid);
    });

    c.bench_function("page_read_all", |b| {
        b.iter(|| page.read_all().len());
    });
}

criterion_group!(benches, index_benchmarks, page_benchmarks);
criterion_main!(benches);
