use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lakewatch::{FillPolicy, LakeAtlas};
use polars::prelude::{Column, DataFrame};

/// 200 lakes x 30 years of monthly columns, with every third value missing.
fn synthetic_atlas() -> LakeAtlas {
    let n_lakes = 200usize;
    let ids: Vec<i64> = (0..n_lakes as i64).collect();
    let lats: Vec<f64> = (0..n_lakes).map(|i| 8.0 + i as f64 * 0.01).collect();
    let lons: Vec<f64> = (0..n_lakes).map(|i| 76.0 + i as f64 * 0.01).collect();

    let mut columns = vec![
        Column::new("Lake_id".into(), ids),
        Column::new("Lat".into(), lats),
        Column::new("Lon".into(), lons),
    ];
    for year in 1990..2020 {
        for month in 1..=12u32 {
            let values: Vec<Option<f64>> = (0..n_lakes)
                .map(|i| {
                    if (i + month as usize) % 3 == 0 {
                        None
                    } else {
                        Some(i as f64 + month as f64)
                    }
                })
                .collect();
            columns.push(Column::new(format!("{year}_{month:02}").into(), values));
        }
    }
    let df = DataFrame::new(columns).expect("valid synthetic frame");
    LakeAtlas::from_dataframe(df).expect("valid synthetic atlas")
}

fn bench_extract(c: &mut Criterion) {
    let atlas = synthetic_atlas();
    for (name, policy) in [
        ("series_raw", FillPolicy::Raw),
        ("series_interpolate", FillPolicy::Interpolate),
        ("series_forward_fill", FillPolicy::ForwardFill),
        ("series_drop_missing", FillPolicy::DropMissing),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                atlas
                    .series()
                    .lake(black_box(137i64))
                    .fill(policy)
                    .call()
                    .unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
