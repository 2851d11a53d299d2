//! Compares the cosine-table and FFT backends on the same signal.
//!
//! Run with `cargo run --example backends --release`.

use std::time::Instant;

use stdct::{
    Backend, FftBackend, IsdctOptions, SdctOptions, Signal, Stdct, StdctError, TableBackend,
};

const LEN: usize = 44_100;
const FRAME_LENGTH: usize = 2048;
const FRAME_STEP: usize = 512;

fn run<B: Backend<f64>>(name: &str, backend: B, signal: &Signal<f64>) -> Result<Vec<f64>, StdctError> {
    let mut engine = Stdct::with_backend(backend);
    let start = Instant::now();
    let coeffs = engine.sdct(signal, &SdctOptions::new(FRAME_LENGTH, FRAME_STEP))?;
    let out = engine.isdct(&coeffs, &IsdctOptions::new(FRAME_STEP))?;
    println!(
        "{:>6}: {} frames in {:?}",
        name,
        coeffs.n_frames(),
        start.elapsed()
    );
    Ok(out.into_vec())
}

fn main() -> Result<(), StdctError> {
    let samples: Vec<f64> = (0..LEN)
        .map(|i| (i as f64 * 0.031).sin() * 0.5 + (i as f64 * 0.0071).cos() * 0.25)
        .collect();
    let signal = Signal::mono(samples);
    let table = run("table", TableBackend::<f64>::new(), &signal)?;
    let fft = run("fft", FftBackend::<f64>::new(), &signal)?;
    let max_diff = table
        .iter()
        .zip(fft.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("max difference between backends: {:e}", max_diff);
    Ok(())
}
