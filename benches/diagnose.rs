use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plant_diagnostic_rust::{diagnose, get_symptoms, DiagnosticEngine, Knowledgebase};

fn bench_single(c: &mut Criterion) {
    let selection = ["yellowing-leaves", "soft-mushy-stem", "root-rot", "pest-presence"];

    c.bench_function("diagnose_4_symptoms", |b| {
        b.iter(|| diagnose(black_box(&selection)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let ids: Vec<String> = get_symptoms().iter().map(|s| s.id.clone()).collect();
    let selections: Vec<Vec<String>> = ids.windows(3).map(|w| w.to_vec()).collect();
    let engine = DiagnosticEngine::new(Knowledgebase::builtin());

    c.bench_function("diagnose_batch_windows_of_3", |b| {
        b.iter(|| engine.diagnose_batch(black_box(&selections)))
    });
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
