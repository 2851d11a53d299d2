//! Reconstruction fidelity of `isdct(sdct(x))` across frame lengths and overlaps.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "rustfft")]
use stdct::FftBackend;
use stdct::{Backend, IsdctOptions, SdctOptions, Signal, Stdct, TableBackend};

/// Frame lengths exercised for every backend.
const FRAME_LENGTHS: [usize; 4] = [2048, 1024, 512, 256];
/// `frame_step = floor(frame_length / ratio)`.
const STEP_RATIOS: [f64; 4] = [4.0, 2.0, 1.1, 1.001];
/// Upper bound on the reconstruction mean squared error.
const MAX_MSE: f64 = 1e-11;

/// Audio-like test signal: a few partials with a slow envelope plus noise, within ±1.
fn audio(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            let t = i as f64 / 22_050.0;
            let env = 0.5 + 0.3 * (2.0 * std::f64::consts::PI * 1.5 * t).sin();
            let tone = (2.0 * std::f64::consts::PI * 220.0 * t).sin()
                + 0.5 * (2.0 * std::f64::consts::PI * 443.0 * t).sin()
                + 0.25 * (2.0 * std::f64::consts::PI * 1021.0 * t).sin();
            0.5 * env * tone + rng.gen_range(-0.05..0.05)
        })
        .collect()
}

fn mse<T: Into<f64> + Copy>(original: &[T], reconstructed: &[T]) -> f64 {
    assert!(reconstructed.len() <= original.len());
    let sum: f64 = original
        .iter()
        .zip(reconstructed.iter())
        .map(|(&a, &b)| {
            let d = a.into() - b.into();
            d * d
        })
        .sum();
    sum / reconstructed.len() as f64
}

fn frame_step(frame_length: usize, ratio: f64) -> usize {
    (frame_length as f64 / ratio).floor() as usize
}

fn check_roundtrip<T, B>(backend: B, signal: &[T])
where
    T: stdct::Float + Into<f64>,
    B: Backend<T>,
{
    let mut engine = Stdct::with_backend(backend);
    let input = Signal::mono(signal.to_vec());
    for frame_length in FRAME_LENGTHS {
        for ratio in STEP_RATIOS {
            let step = frame_step(frame_length, ratio);
            let coeffs = engine
                .sdct(&input, &SdctOptions::new(frame_length, step))
                .unwrap();
            assert_eq!(coeffs.frame_length(), frame_length);
            assert_eq!(
                coeffs.n_frames(),
                (signal.len() - frame_length) / step + 1
            );
            let out = engine.isdct(&coeffs, &IsdctOptions::new(step)).unwrap();
            assert_eq!(
                out.n_samples(),
                (coeffs.n_frames() - 1) * step + frame_length
            );
            let err = mse(signal, out.as_slice());
            assert!(
                err <= MAX_MSE,
                "frame_length={} step={} mse={:e}",
                frame_length,
                step,
                err
            );
        }
    }
}

#[test]
fn table_backend_f64_roundtrip() {
    let signal = audio(3 * 2048 + 123, 7);
    check_roundtrip(TableBackend::<f64>::new(), &signal);
}

#[cfg(feature = "rustfft")]
#[test]
fn fft_backend_f64_roundtrip() {
    let signal = audio(3 * 2048 + 123, 11);
    check_roundtrip(FftBackend::<f64>::new(), &signal);
}

#[cfg(feature = "rustfft")]
#[test]
fn fft_backend_f32_roundtrip() {
    let signal: Vec<f32> = audio(3 * 2048 + 123, 13).iter().map(|&v| v as f32).collect();
    check_roundtrip(FftBackend::<f32>::new(), &signal);
}

#[test]
fn table_backend_f32_short_frames() {
    let signal: Vec<f32> = audio(4000, 17).iter().map(|&v| v as f32).collect();
    let mut engine = Stdct::<TableBackend<f32>>::new();
    let input = Signal::mono(signal.clone());
    for frame_length in [512usize, 256] {
        for ratio in STEP_RATIOS {
            let step = frame_step(frame_length, ratio);
            let coeffs = engine
                .sdct(&input, &SdctOptions::new(frame_length, step))
                .unwrap();
            let out = engine.isdct(&coeffs, &IsdctOptions::new(step)).unwrap();
            let err = mse(&signal, out.as_slice());
            assert!(err <= MAX_MSE, "frame_length={} step={} mse={:e}", frame_length, step, err);
        }
    }
}

#[test]
fn every_window_kind_roundtrips_with_overlap() {
    use stdct::WindowKind;
    let signal = audio(1500, 23);
    let input = Signal::mono(signal.clone());
    // Hann, Bartlett and Blackman taper to (nearly) zero at the first tap,
    // so the first sample divides by ~0.
    for kind in [
        WindowKind::Hamming,
        WindowKind::Hann,
        WindowKind::Blackman,
        WindowKind::Bartlett,
        WindowKind::Boxcar,
    ] {
        let coeffs = stdct::sdct(&input, 128, 32, Some(kind)).unwrap();
        let out = stdct::isdct(&coeffs, &IsdctOptions::new(32).window(Some(kind))).unwrap();
        let start = 1;
        let err = mse(&signal[start..], &out.as_slice()[start..]);
        assert!(err <= MAX_MSE, "{} mse={:e}", kind, err);
    }
}
