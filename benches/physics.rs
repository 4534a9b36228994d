//! Benchmarks for springcore integrators.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use springcore::*;

fn bench_semi_implicit(c: &mut Criterion) {
    let params = PhysicsParameters::new();
    c.bench_function("semi_implicit_1000_steps", |b| {
        b.iter(|| {
            let mut state: SpringValue<f32> = SpringValue::new(0.0);
            state.target = 10.0;
            for _ in 0..1000 {
                SemiImplicitIntegrator.update(1.0 / 60.0, &mut state, &params);
                state.commit_candidate();
            }
            state.current_value
        });
    });
}

fn bench_analytical(c: &mut Criterion) {
    let params = PhysicsParameters::new();
    c.bench_function("analytical_1000_steps", |b| {
        b.iter(|| {
            let mut state: SpringValue<f32> = SpringValue::new(0.0);
            state.target = 10.0;
            for _ in 0..1000 {
                AnalyticalIntegrator.update(1.0 / 60.0, &mut state, &params);
                state.commit_candidate();
            }
            state.current_value
        });
    });
}

fn bench_selection(c: &mut Criterion) {
    let registry: ModelRegistry<f32> = ModelRegistry::with_defaults();
    let params = PhysicsParameters::new();
    c.bench_function("registry_select", |b| {
        b.iter(|| registry.select(black_box(&params)).name());
    });
}

fn bench_color_spring(c: &mut Criterion) {
    let solver = SpringSolver::<f32>::new();
    c.bench_function("color_spring_60_frames", |b| {
        b.iter(|| {
            let mut spring = ColorSpring::new([0.0; 4], PhysicsParameters::new()).unwrap();
            spring.set_target([1.0, 0.5, 0.25, 1.0]);
            for _ in 0..60 {
                spring.update(1.0 / 60.0, &solver, &mut NoOpStepObserver);
            }
            spring.value()
        });
    });
}

criterion_group!(benches, bench_semi_implicit, bench_analytical, bench_selection, bench_color_spring);
criterion_main!(benches);
