use std::f64::consts::PI;
use std::fs;

use waveplot::plot::plot;
use waveplot::signal_generator::{generate_sine_wave, linspace};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let frequency = 1.0;

    let t = linspace(0.0, 2.0 * PI, 1000);
    let y = generate_sine_wave(&t, frequency);

    let plot_dir = "plots";
    if !std::path::Path::new(plot_dir).exists() {
        fs::create_dir_all(plot_dir)?;
    }

    plot(
        &t,
        &y,
        (1200, 600),
        &format!("{}/sine_wave.png", plot_dir),
        "Harmonic Sine Wave - Two Periods",
        "Time",
        "Amplitude",
    )?;

    Ok(())
}
