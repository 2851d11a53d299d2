//! DCT-II / DCT-III through an N-point complex FFT (Makhoul's reordering).
//!
//! Forward: the frame is permuted so even samples ascend and odd samples
//! descend, transformed with a length-N FFT, and each bin `k` is rotated by
//! `exp(-iπk/2N)`; the real part is the unnormalized DCT-II. The inverse
//! rebuilds the rotated spectrum as `exp(iπk/2N) (Y[k] - i·Y[N-k])`, runs an
//! inverse FFT and undoes the permutation.

use alloc::vec::Vec;
use std::sync::Arc;

use hashbrown::HashMap;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftNum, FftPlanner};

use crate::backend::Backend;
use crate::dct::ortho_scale;
use crate::num::Float;

/// Per-length rotation and scale factors.
struct Twiddles<T> {
    /// `(cos, sin)` of `πk/2N`.
    rotation: Vec<(T, T)>,
    /// Orthonormal coefficient scale `f_k`.
    scale: Vec<T>,
    /// `1 / f_k`.
    inv_scale: Vec<T>,
    inv_n: T,
}

impl<T: Float> Twiddles<T> {
    fn new(n: usize) -> Self {
        let step = core::f64::consts::PI / (2.0 * n as f64);
        let rotation = (0..n)
            .map(|k| {
                let angle = step * k as f64;
                (
                    <T as Float>::from_f64(libm::cos(angle)),
                    <T as Float>::from_f64(libm::sin(angle)),
                )
            })
            .collect();
        let scale = (0..n)
            .map(|k| <T as Float>::from_f64(ortho_scale(k, n)))
            .collect();
        let inv_scale = (0..n)
            .map(|k| <T as Float>::from_f64(1.0 / ortho_scale(k, n)))
            .collect();
        Self {
            rotation,
            scale,
            inv_scale,
            inv_n: <T as Float>::from_f64(1.0 / n as f64),
        }
    }
}

/// Backend computing the DCT with `rustfft`'s planned FFTs.
pub struct FftBackend<T: Float + FftNum> {
    planner: FftPlanner<T>,
    twiddles: HashMap<usize, Twiddles<T>>,
    buffer: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float + FftNum> Default for FftBackend<T> {
    fn default() -> Self {
        Self {
            planner: FftPlanner::new(),
            twiddles: HashMap::new(),
            buffer: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

impl<T: Float + FftNum> FftBackend<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn prepare(&mut self, n: usize, fft: &Arc<dyn Fft<T>>) {
        self.twiddles.entry(n).or_insert_with(|| Twiddles::new(n));
        let zero = Complex::new(<T as Float>::zero(), <T as Float>::zero());
        self.buffer.resize(n, zero);
        self.scratch.resize(fft.get_inplace_scratch_len(), zero);
    }
}

impl<T: Float + FftNum> Backend<T> for FftBackend<T> {
    fn dct_forward(&mut self, block: &mut [T], frame_length: usize) {
        if frame_length == 0 || block.is_empty() {
            return;
        }
        let n = frame_length;
        let fft = self.planner.plan_fft_forward(n);
        self.prepare(n, &fft);
        let Self {
            twiddles,
            buffer,
            scratch,
            ..
        } = self;
        let tw = &twiddles[&n];
        let zero = <T as Float>::zero();
        for frame in block.chunks_exact_mut(n) {
            let evens = frame.iter().step_by(2);
            let odds = frame.iter().skip(1).step_by(2).rev();
            for (slot, &x) in buffer.iter_mut().zip(evens.chain(odds)) {
                *slot = Complex::new(x, zero);
            }
            fft.process_with_scratch(buffer, scratch);
            for (k, out) in frame.iter_mut().enumerate() {
                let (c, s) = tw.rotation[k];
                let v = buffer[k];
                *out = (v.re * c + v.im * s) * tw.scale[k];
            }
        }
    }

    fn dct_inverse(&mut self, block: &mut [T], frame_length: usize) {
        if frame_length == 0 || block.is_empty() {
            return;
        }
        let n = frame_length;
        let fft = self.planner.plan_fft_inverse(n);
        self.prepare(n, &fft);
        let Self {
            twiddles,
            buffer,
            scratch,
            ..
        } = self;
        let tw = &twiddles[&n];
        let zero = <T as Float>::zero();
        for frame in block.chunks_exact_mut(n) {
            for (k, slot) in buffer.iter_mut().enumerate() {
                let p = frame[k] * tw.inv_scale[k];
                let q = if k == 0 {
                    zero
                } else {
                    -(frame[n - k] * tw.inv_scale[n - k])
                };
                let (c, s) = tw.rotation[k];
                *slot = Complex::new(c * p - s * q, s * p + c * q);
            }
            fft.process_with_scratch(buffer, scratch);
            let half = n.div_ceil(2);
            for (j, v) in buffer.iter().enumerate() {
                let idx = if j < half { 2 * j } else { 2 * (n - 1 - j) + 1 };
                frame[idx] = v.re * tw.inv_n;
            }
        }
    }
}
