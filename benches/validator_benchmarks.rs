//! Validator performance benchmarks.
//!
//! Measures full-file validation throughput across file sizes, quoted-name
//! density, and error density.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use poi_validator::{PoiCsvValidator, PoiSchema};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Generate a synthetic PoI export with the specified number of data rows.
///
/// `quote_every` and `flaw_every` control how often (every Nth row, 0 for
/// never) a name is quoted with embedded commas and how often a row carries
/// a validation error.
fn generate_poi_data(rows: usize, quote_every: usize, flaw_every: usize) -> String {
    let mut data =
        String::from("poi_id,poi_name,poi_category,poi_latitude,poi_longitude,poi_ratings\n");

    for row in 0..rows {
        let id = row + 1;
        let lat = 50.0 + (row % 100) as f64 * 0.01;
        let lon = -1.0 - (row % 100) as f64 * 0.01;

        if flaw_every > 0 && row % flaw_every == 0 {
            // Rotate through violation kinds so the error path stays varied
            match row % 3 {
                0 => data.push_str(&format!(
                    "id-{},Stop {},Transit,{:.4},{:.4},{{\"stars\": 3}}\n",
                    id, id, lat, lon
                )),
                1 => data.push_str(&format!(
                    "{},Stop {},Transit,{:.4},{:.4},no ratings cell\n",
                    id, id, lat, lon
                )),
                _ => data.push_str(&format!(
                    "{},Stop {},Transit,north,{:.4},{{\"stars\": 3}}\n",
                    id, id, lon
                )),
            }
        } else if quote_every > 0 && row % quote_every == 0 {
            data.push_str(&format!(
                "{},\"Stop {}, Platform {}\",Transit,{:.4},{:.4},{{\"stars\": {}}}\n",
                id,
                id,
                row % 12,
                lat,
                lon,
                row % 5 + 1
            ));
        } else {
            data.push_str(&format!(
                "{},Stop {},Transit,{:.4},{:.4},{{\"stars\": {}}}\n",
                id,
                id,
                lat,
                lon,
                row % 5 + 1
            ));
        }
    }

    data
}

/// Benchmark validating clean files of various sizes.
fn bench_validate_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_clean");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_poi_data(*rows, 7, 0);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::new().unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let validator = PoiCsvValidator::new(Arc::new(PoiSchema::standard()));
                    black_box(validator.validate_file(temp.path()).unwrap())
                },
            )
        });
    }

    group.finish();
}

/// Benchmark the quoted-cell state machine at varying densities.
fn bench_validate_quoted_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_quoted_names");

    let rows = 1_000;
    for quote_every in [0, 16, 4, 1].iter() {
        let data = generate_poi_data(rows, *quote_every, 0);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(
            BenchmarkId::new("quote_every", quote_every),
            &data,
            |b, data| {
                b.iter_with_setup(
                    || {
                        let mut temp = NamedTempFile::new().unwrap();
                        temp.write_all(data.as_bytes()).unwrap();
                        temp
                    },
                    |temp| {
                        let validator = PoiCsvValidator::new(Arc::new(PoiSchema::standard()));
                        black_box(validator.validate_file(temp.path()).unwrap())
                    },
                )
            },
        );
    }

    group.finish();
}

/// Benchmark error collection at varying flaw densities.
fn bench_validate_flawed(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_flawed");

    let rows = 1_000;
    for flaw_every in [0, 100, 10, 2].iter() {
        let data = generate_poi_data(rows, 7, *flaw_every);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(
            BenchmarkId::new("flaw_every", flaw_every),
            &data,
            |b, data| {
                b.iter_with_setup(
                    || {
                        let mut temp = NamedTempFile::new().unwrap();
                        temp.write_all(data.as_bytes()).unwrap();
                        temp
                    },
                    |temp| {
                        let validator = PoiCsvValidator::new(Arc::new(PoiSchema::standard()));
                        black_box(validator.validate_file(temp.path()).unwrap())
                    },
                )
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_clean,
    bench_validate_quoted_names,
    bench_validate_flawed,
);
criterion_main!(benches);
