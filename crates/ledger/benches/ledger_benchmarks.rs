use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{TimeZone, Utc};

use wardstock_core::ItemCode;
use wardstock_inventory::Department;
use wardstock_ledger::demo::seeded_ledger;
use wardstock_ledger::InventoryLedger;

fn bench_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn ledger_with_log(entries: usize) -> InventoryLedger {
    let mut ledger = seeded_ledger(bench_time()).unwrap();
    let code = ItemCode::new("SUP002").unwrap();
    // Top the item up so long logs never run the stock dry.
    ledger
        .update_stock(&code, u32::MAX, 800, "Medical Store", bench_time())
        .unwrap();

    for i in 0..entries {
        let department = match i % 3 {
            0 => Department::Icu,
            1 => Department::GeneralWard,
            _ => Department::Ot,
        };
        ledger
            .record_usage(&code, 1, "Sister Priya", department, "", bench_time())
            .unwrap();
    }
    ledger
}

fn bench_record_usage(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_usage");
    group.throughput(Throughput::Elements(1));

    group.bench_function("seeded_catalog", |b| {
        let code = ItemCode::new("SUP001").unwrap();
        b.iter_batched(
            || seeded_ledger(bench_time()).unwrap(),
            |mut ledger| {
                ledger
                    .record_usage(
                        black_box(&code),
                        1,
                        "Sister Priya",
                        Department::Icu,
                        "",
                        bench_time(),
                    )
                    .unwrap()
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_derived_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_queries");

    for entries in [100usize, 1_000, 10_000] {
        let ledger = ledger_with_log(entries);

        group.bench_with_input(
            BenchmarkId::new("usage_by_department", entries),
            &ledger,
            |b, ledger| b.iter(|| black_box(ledger.usage_by_department())),
        );

        group.bench_with_input(
            BenchmarkId::new("top_used_items", entries),
            &ledger,
            |b, ledger| b.iter(|| black_box(ledger.top_used_items(5))),
        );
    }

    let ledger = ledger_with_log(0);
    group.bench_function("low_stock_alerts", |b| {
        b.iter(|| black_box(ledger.low_stock_alerts()))
    });
    group.bench_function("expiring_soon", |b| {
        let today = bench_time().date_naive();
        b.iter(|| black_box(ledger.expiring_soon(today, 30)))
    });

    group.finish();
}

criterion_group!(benches, bench_record_usage, bench_derived_queries);
criterion_main!(benches);
