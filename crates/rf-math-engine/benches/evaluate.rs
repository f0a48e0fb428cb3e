//! Evaluation benchmarks

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rf_math_engine::{
    ClassicPaytableBuilder, EvaluatorKind, Evaluator, LiveRng, PaytableBuilder, ReplayRng,
    ScatterEvaluator, SimConfig, SlotEvaluator, simulate,
};

fn bench_scatter_replay(c: &mut Criterion) {
    let paytable = ClassicPaytableBuilder::new().build().unwrap();
    let evaluator = ScatterEvaluator::new();

    c.bench_function("scatter_replay", |b| {
        b.iter(|| {
            let mut rng = ReplayRng::new(vec![3, 3, 3]);
            black_box(evaluator.evaluate(&paytable, &mut rng).unwrap());
        })
    });
}

fn bench_slot_round(c: &mut Criterion) {
    let paytable = ClassicPaytableBuilder::new().build().unwrap();
    let evaluator = SlotEvaluator::new();
    let mut rng = LiveRng::seeded(1);

    c.bench_function("slot_round_live", |b| {
        b.iter(|| {
            black_box(evaluator.evaluate(&paytable, &mut rng).unwrap());
        })
    });
}

fn bench_simulation(c: &mut Criterion) {
    let paytable = ClassicPaytableBuilder::new().build().unwrap();
    let config = SimConfig {
        rounds: 10_000,
        seed: 5,
        evaluator: EvaluatorKind::Slot,
    };

    let mut group = c.benchmark_group("simulation");
    group.sample_size(20);
    group.bench_function("slot_10k", |b| {
        b.iter(|| black_box(simulate(&paytable, &config).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_scatter_replay, bench_slot_round, bench_simulation);
criterion_main!(benches);
