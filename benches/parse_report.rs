//! Report parsing and calendar building benchmarks
//!
//! Measures `parse_all` over synthetic reports of increasing size, and the
//! build-then-render step over the records it produces.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ooo_calendar::app::services::calendar_builder::{build, render};
use ooo_calendar::app::services::report_parser::parse_all;

const LEAVE_TYPES: &[&str] = &["Vacation", "Sick", "Floating Holiday", "Jury Duty", "Surge"];
const STATUSES: &[&str] = &["Taken", "Approved", "Submitted", "Cancelled", "Declined"];

/// Generate a report with a blank separator after every tenth row
fn synthetic_report(rows: usize) -> String {
    let mut report = String::from("Time Off Requests\n");
    for i in 0..rows {
        let month = i % 12 + 1;
        let day = i % 28 + 1;
        report.push_str(&format!(
            "\"Company:  (123456)\",\"GL Categor: \",\"Practice: \",\"Department: \",\": \",\": \",\
             \"Employee{i}, Name{i} \",\"{i:03}\",\"{}\",\"{month:02}/{day:02}/2021\",\
             \"{month:02}/{day:02}/2021\",\"8.00\",\"100.00\",\"{}\",\"Bosslast, Bossfirst\"\n",
            LEAVE_TYPES[i % LEAVE_TYPES.len()],
            STATUSES[i % STATUSES.len()],
        ));
        if i % 10 == 9 {
            report.push_str(",,,\n");
        }
    }
    report
}

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_all");

    for rows in [100, 1_000, 10_000] {
        let report = synthetic_report(rows);
        group.throughput(Throughput::Bytes(report.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &report, |b, report| {
            b.iter(|| {
                let result = parse_all(black_box(report.as_bytes()));
                black_box(result.records.len())
            });
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_and_render");

    for rows in [100, 1_000] {
        let records = parse_all(synthetic_report(rows).as_bytes()).records;
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &records, |b, records| {
            b.iter(|| black_box(render(&build(black_box(records)))).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_all, bench_build_and_render);
criterion_main!(benches);
