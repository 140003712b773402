// benches/flatten.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

use rms_export::{
    config::options::{ColumnPolicy, ReportKind},
    csv::{resolve_header, write_rows},
};

/// Synthetic FundingDetails payload: `n` projects, five years, three awards.
fn funding_records(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let years: Vec<Value> = (2025..2030)
                .map(|y| json!({ "year": y, "fundingAmount": 10_000 * (i + 1) }))
                .collect();
            json!({
                "projectId": format!("DP25{:07}", i),
                "projectSummary": "A reasonably long project summary, with commas, and \"quotes\".",
                "specialConditions": ["Ethics approval", "Data management plan"],
                "fundingAmountApprovedForEachFinancialYear": years,
                "fundingAmountApprovedForEachCalendarYear": years,
                "fundingAmountForAwardsApprovedForEachFinancialYear": {
                    "DECRA": years, "Future Fellowship": years, "Laureate": years
                },
                "fundingAmountForAwardsApprovedForEachCalendarYear": {
                    "DECRA": years
                }
            })
        })
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let records = funding_records(500);
    let kind = ReportKind::FundingDetailsForSuccessfulProposals;

    c.bench_function("funding_flatten_500", |b| {
        b.iter(|| {
            let rows = kind.flatten_all(black_box(&records));
            black_box(rows.len())
        })
    });

    let rows = kind.flatten_all(&records);
    c.bench_function("funding_write_500", |b| {
        b.iter(|| {
            let header = resolve_header(black_box(&rows), ColumnPolicy::Union).unwrap();
            let mut buf = Vec::with_capacity(1 << 20);
            write_rows(&mut buf, &header, &rows).unwrap();
            black_box(buf.len())
        })
    });
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
