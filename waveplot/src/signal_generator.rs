use std::f64::consts::PI;

use nalgebra::DVector;

/// Evenly spaced samples from `start` to `end`, both endpoints included.
/// Callers pass `num_samples >= 2`.
pub fn linspace(start: f64, end: f64, num_samples: usize) -> DVector<f64> {
    let step = (end - start) / (num_samples - 1) as f64;
    DVector::from_iterator(
        num_samples,
        (0..num_samples).map(|i| start + step * i as f64),
    )
}

pub fn generate_sine_wave(t: &DVector<f64>, freq: f64) -> DVector<f64> {
    (2.0 * PI * freq * t.clone()).map(|e| e.sin())
}
