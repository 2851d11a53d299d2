//! STDCT usage example for stdct
//! Demonstrates forward and inverse STDCT on a mono and a stereo signal.
//! Run with `cargo run --example stdct_usage`.

use stdct::{isdct, sdct, IsdctOptions, Signal, StdctError, WindowKind};

/// Sample rate of the synthetic signal in Hz.
const SAMPLE_RATE: f32 = 16_000.0;
/// One second of audio.
const LEN: usize = 16_000;
const FRAME_LENGTH: usize = 512;
const FRAME_STEP: usize = 128;

fn tone(freq: f32) -> Vec<f32> {
    (0..LEN)
        .map(|i| 0.4 * (2.0 * std::f32::consts::PI * freq * i as f32 / SAMPLE_RATE).sin())
        .collect()
}

fn main() -> Result<(), StdctError> {
    let mono = tone(440.0);
    let coeffs = sdct(
        &Signal::mono(mono.clone()),
        FRAME_LENGTH,
        FRAME_STEP,
        Some(WindowKind::Hamming),
    )?;
    println!("DCT matrix shape: {:?}", coeffs.shape());

    // 440 Hz sits near coefficient 2 * 440 / 16000 * 512
    let frame = coeffs.frame(0, coeffs.n_frames() / 2);
    let peak = frame
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(k, _)| k)
        .unwrap_or(0);
    println!("Peak coefficient in the middle frame: {}", peak);

    let rebuilt = isdct(&coeffs, &IsdctOptions::new(FRAME_STEP))?;
    let mse = mono
        .iter()
        .zip(rebuilt.as_slice())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f32>()
        / rebuilt.n_samples() as f32;
    println!("Reconstructed {} samples, mse = {:e}", rebuilt.n_samples(), mse);

    let stereo = Signal::from_channels(&[tone(440.0), tone(660.0)])?;
    let coeffs = sdct(&stereo, FRAME_LENGTH, FRAME_STEP, Some(WindowKind::Hann))?;
    println!("Stereo DCT shape: {:?}", coeffs.shape());
    let rebuilt = isdct(
        &coeffs,
        &IsdctOptions::new(FRAME_STEP).window(Some(WindowKind::Hann)),
    )?;
    println!("Stereo output shape: {:?}", rebuilt.shape());
    Ok(())
}
