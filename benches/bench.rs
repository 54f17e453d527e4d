use std::{
    fs::File,
    io::{BufRead, BufReader},
    time::Duration,
};

use criterion::{criterion_group, criterion_main, Criterion};
use running_median::Tracker;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut data = Vec::with_capacity(2000);
    let f = BufReader::new(File::open("./test_data/2000_values.txt").unwrap());

    for line in f.lines() {
        let v: i64 = line.unwrap().trim().parse().unwrap();
        data.push(v);
    }

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .sample_size(1000);

    group.bench_function("insert all, median once", |b| {
        b.iter(|| {
            let mut tracker = Tracker::new();

            for v in data.iter() {
                tracker.insert(*v);
            }

            let _median = tracker.median();
        })
    });

    group.bench_function("median after every insert", |b| {
        b.iter(|| {
            let mut tracker = Tracker::with_capacity(data.len());

            for v in data.iter() {
                tracker.insert(*v);
                let _median = tracker.median();
            }
        })
    });

    let full: Tracker = data.iter().copied().collect();
    group.bench_function("sorted halves", |b| {
        b.iter(|| {
            let _lower = full.sorted_lower_half();
            let _upper = full.sorted_upper_half();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
