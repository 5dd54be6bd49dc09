use criterion::*;
use nalgebra::DVector;
use rand::Rng;
use waveplot::signal_generator::generate_sine_wave;

fn sine_wave_benchmark(c: &mut Criterion) {
    let n = 1000;
    let mut rng = rand::thread_rng();
    let t = DVector::<f64>::from_fn(n, |_, _| rng.gen());
    c.bench_function("generate_sine_wave", |b| {
        b.iter(|| generate_sine_wave(black_box(&t), black_box(1.0)))
    });
}

criterion_group!(benches, sine_wave_benchmark);

criterion_main!(benches);
