//! Orthonormal Discrete Cosine Transform (DCT) module
//! DCT-II (analysis) and DCT-III (synthesis) for f32/f64 real input
//! no_std + alloc compatible

extern crate alloc;
use crate::num::Float;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use hashbrown::HashMap;

/// Planner for caching orthonormal cosine tables used by DCT-II and DCT-III.
///
/// Tables are computed in `f64` and narrowed to `T`, so an `f32` planner
/// carries only the rounding error of the accumulation itself.
pub struct DctPlanner<T: Float> {
    cache2: HashMap<usize, Vec<T>>,
    cache3: HashMap<usize, Vec<T>>,
}

impl<T: Float> Default for DctPlanner<T> {
    fn default() -> Self {
        Self {
            cache2: HashMap::new(),
            cache3: HashMap::new(),
        }
    }
}

/// Orthonormal scale of coefficient `k` for a length-`n` transform.
#[inline]
pub fn ortho_scale(k: usize, n: usize) -> f64 {
    if k == 0 {
        libm::sqrt(1.0 / n as f64)
    } else {
        libm::sqrt(2.0 / n as f64)
    }
}

impl<T: Float> DctPlanner<T> {
    /// Create a new empty planner
    pub fn new() -> Self {
        Self::default()
    }

    fn get_table(
        cache: &mut HashMap<usize, Vec<T>>,
        n: usize,
        f: impl Fn(usize, usize) -> f64,
    ) -> &[T] {
        cache
            .entry(n)
            .or_insert_with(|| {
                let mut table = vec![T::zero(); n * n];
                for row in 0..n {
                    for col in 0..n {
                        table[row * n + col] = T::from_f64(f(row, col));
                    }
                }
                table
            })
            .as_slice()
    }

    /// Retrieve the cached DCT-II table of size `n`; row `k` produces coefficient `k`.
    pub fn get_dct2(&mut self, n: usize) -> &[T] {
        if n == 0 {
            return &[];
        }
        let factor = PI / n as f64;
        Self::get_table(&mut self.cache2, n, |k, i| {
            ortho_scale(k, n) * libm::cos(factor * (i as f64 + 0.5) * k as f64)
        })
    }

    /// Retrieve the cached DCT-III table of size `n`; row `i` produces sample `i`.
    pub fn get_dct3(&mut self, n: usize) -> &[T] {
        if n == 0 {
            return &[];
        }
        let factor = PI / n as f64;
        Self::get_table(&mut self.cache3, n, |i, k| {
            ortho_scale(k, n) * libm::cos(factor * (i as f64 + 0.5) * k as f64)
        })
    }

    /// Number of distinct lengths currently cached.
    pub fn cached_lengths(&self) -> usize {
        self.cache2.len().max(self.cache3.len())
    }
}

/// Multiply `input` by a row-major `n x n` table.
#[inline]
pub fn apply_table<T: Float>(table: &[T], input: &[T], output: &mut [T]) {
    let n = input.len();
    debug_assert_eq!(table.len(), n * n);
    debug_assert_eq!(output.len(), n);
    for (row, out) in table.chunks_exact(n).zip(output.iter_mut()) {
        let mut sum = T::zero();
        for (&c, &x) in row.iter().zip(input.iter()) {
            sum = x.mul_add(c, sum);
        }
        *out = sum;
    }
}

/// Orthonormal DCT-II (`norm="ortho"`)
pub fn dct2<T: Float>(planner: &mut DctPlanner<T>, input: &[T]) -> Vec<T> {
    let n = input.len();
    if n == 0 {
        return vec![];
    }
    let table = planner.get_dct2(n);
    let mut output = vec![T::zero(); n];
    apply_table(table, input, &mut output);
    output
}

/// Orthonormal DCT-III, the exact inverse of [`dct2`]
pub fn dct3<T: Float>(planner: &mut DctPlanner<T>, input: &[T]) -> Vec<T> {
    let n = input.len();
    if n == 0 {
        return vec![];
    }
    let table = planner.get_dct3(n);
    let mut output = vec![T::zero(); n];
    apply_table(table, input, &mut output);
    output
}

/// Batch DCT-II over consecutive `frame_length` chunks of `block`, in place.
pub fn batch_ii<T: Float>(planner: &mut DctPlanner<T>, block: &mut [T], frame_length: usize) {
    transform_chunks(planner.get_dct2(frame_length), block, frame_length);
}

/// Batch DCT-III over consecutive `frame_length` chunks of `block`, in place.
pub fn batch_iii<T: Float>(planner: &mut DctPlanner<T>, block: &mut [T], frame_length: usize) {
    transform_chunks(planner.get_dct3(frame_length), block, frame_length);
}

fn transform_chunks<T: Float>(table: &[T], block: &mut [T], frame_length: usize) {
    if frame_length == 0 || block.is_empty() {
        return;
    }
    #[cfg(feature = "parallel")]
    {
        if crate::config::use_parallel(block.len() / frame_length) {
            use rayon::prelude::*;
            block
                .par_chunks_mut(frame_length)
                .for_each_init(|| vec![T::zero(); frame_length], |scratch, frame| {
                    scratch.copy_from_slice(frame);
                    apply_table(table, scratch, frame);
                });
            return;
        }
    }
    let mut scratch = vec![T::zero(); frame_length];
    for frame in block.chunks_exact_mut(frame_length) {
        scratch.copy_from_slice(frame);
        apply_table(table, &scratch, frame);
    }
}
