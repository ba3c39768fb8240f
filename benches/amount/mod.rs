use criterion::{criterion_group, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("amount::new", |b| {
        b.iter(|| {
            let _ = coinutil::amount::new(444333.222111);
        })
    });

    c.bench_function("amount::from_str", |b| {
        b.iter(|| {
            let _ = "444333.222111".parse::<coinutil::amount::Amount>();
        })
    });

    c.bench_function("amount::display", |b| {
        let amount = coinutil::amount::Amount::from(44433322211100u64);

        b.iter(|| amount.to_string())
    });
}

criterion_group!(amount_conversion, criterion_benchmark);
