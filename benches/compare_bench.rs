//! Benchmarks for the line set and the full comparison path

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fcompare::commands::compare;
use fcompare::{Line, LineSet, Tuning};
use std::io::{self, Write};
use tempfile::NamedTempFile;

const LINE_COUNT: usize = 100_000;

fn synthetic_lines(count: usize, salt: u64) -> Vec<String> {
    (0..count)
        .map(|i| format!("record-{salt}-{i}-{:016x}", (i as u64).wrapping_mul(salt | 1)))
        .collect()
}

fn write_temp_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn bench_set_build(c: &mut Criterion) {
    let lines = synthetic_lines(LINE_COUNT, 7);

    let mut group = c.benchmark_group("set_build");
    group.bench_function("well_sized", |b| {
        b.iter_batched(
            || lines.clone(),
            |lines| {
                let mut set = LineSet::with_tuning(LINE_COUNT * 2, 8);
                for line in lines {
                    set.insert(Line::from(line.into_bytes()));
                }
                set
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("undersized", |b| {
        b.iter_batched(
            || lines.clone(),
            |lines| {
                // Starts at 16 slots, pays for every doubling
                let mut set = LineSet::with_tuning(16, 8);
                for line in lines {
                    set.insert(Line::from(line.into_bytes()));
                }
                set
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let lines = synthetic_lines(LINE_COUNT, 7);
    let mut set = LineSet::with_tuning(LINE_COUNT * 2, 8);
    for line in &lines {
        set.insert(Line::from(line.as_str()));
    }

    c.bench_function("contains_hit_and_miss", |b| {
        let probe_hit = lines[LINE_COUNT / 2].as_bytes();
        let probe_miss = b"not-a-record";
        b.iter(|| set.contains(probe_hit) ^ set.contains(probe_miss))
    });
}

fn bench_full_compare(c: &mut Criterion) {
    let lines_a = synthetic_lines(LINE_COUNT, 7);
    let mut lines_b = synthetic_lines(LINE_COUNT / 2, 7);
    lines_b.extend(synthetic_lines(LINE_COUNT / 2, 13));

    let f1 = write_temp_file(&lines_a);
    let f2 = write_temp_file(&lines_b);

    c.bench_function("compare_100k_lines", |b| {
        b.iter(|| {
            compare::run_to(f1.path(), f2.path(), Tuning::default(), &mut io::sink()).unwrap()
        })
    });
}

criterion_group!(benches, bench_set_build, bench_contains, bench_full_compare);
criterion_main!(benches);
