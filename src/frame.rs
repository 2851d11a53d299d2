//! Framing and overlap-add ("deframing") of batched signals.
//!
//! Frames never pad: a trailing run of samples shorter than `frame_length`
//! is dropped, and a signal shorter than one frame yields zero frames.

use alloc::vec::Vec;

use crate::array::{Frames, Signal};
use crate::error::StdctError;
use crate::num::Float;

/// Number of complete frames of `frame_length` samples at stride `frame_step`.
///
/// `frame_step` must be non-zero.
#[inline]
pub fn frame_count(n_samples: usize, frame_length: usize, frame_step: usize) -> usize {
    if n_samples < frame_length {
        0
    } else {
        (n_samples - frame_length) / frame_step + 1
    }
}

/// Length of the signal rebuilt from `n_frames` frames, or `0` when there are none.
///
/// Returns `None` when the length does not fit in `usize`.
#[inline]
pub fn deframed_len(n_frames: usize, frame_length: usize, frame_step: usize) -> Option<usize> {
    if n_frames == 0 {
        return Some(0);
    }
    (n_frames - 1)
        .checked_mul(frame_step)?
        .checked_add(frame_length)
}

/// Slice every batch row of `signal` into frames at stride `frame_step`.
///
/// Returns [`StdctError::InvalidFrameLength`] or [`StdctError::InvalidFrameStep`]
/// for zero parameters.
pub fn frame_extract<T: Float>(
    signal: &Signal<T>,
    frame_length: usize,
    frame_step: usize,
) -> Result<Frames<T>, StdctError> {
    if frame_length == 0 {
        return Err(StdctError::InvalidFrameLength);
    }
    if frame_step == 0 {
        return Err(StdctError::InvalidFrameStep);
    }
    let n_frames = frame_count(signal.n_samples(), frame_length, frame_step);
    let mut frames = Frames::zeros(signal.batch_shape(), n_frames, frame_length);
    if frames.is_empty() {
        return Ok(frames);
    }
    let block = n_frames * frame_length;

    #[cfg(feature = "parallel")]
    {
        if crate::config::use_parallel(n_frames * signal.batch_len()) {
            use rayon::prelude::*;
            let rows: Vec<&[T]> = signal.channels().collect();
            frames
                .as_mut_slice()
                .par_chunks_mut(block)
                .zip(rows.into_par_iter())
                .for_each(|(out, row)| frame_row(row, out, frame_length, frame_step));
            return Ok(frames);
        }
    }

    let rows: Vec<&[T]> = signal.channels().collect();
    for (out, row) in frames.as_mut_slice().chunks_exact_mut(block).zip(rows) {
        frame_row(row, out, frame_length, frame_step);
    }
    Ok(frames)
}

fn frame_row<T: Float>(row: &[T], out: &mut [T], frame_length: usize, frame_step: usize) {
    for (i, frame) in out.chunks_exact_mut(frame_length).enumerate() {
        let start = i * frame_step;
        frame.copy_from_slice(&row[start..start + frame_length]);
    }
}

/// Overlap-add every batch row of `frames` at stride `frame_step`.
///
/// Output rows have `(n_frames - 1) * frame_step + frame_length` samples;
/// frames are accumulated in ascending order starting from zero.
pub fn overlap_add<T: Float>(frames: &Frames<T>, frame_step: usize) -> Result<Signal<T>, StdctError> {
    if frame_step == 0 {
        return Err(StdctError::InvalidFrameStep);
    }
    let frame_length = frames.frame_length();
    let n_frames = frames.n_frames();
    let out_len =
        deframed_len(n_frames, frame_length, frame_step).ok_or(StdctError::InvalidFrameStep)?;
    let mut signal = Signal::zeros(frames.batch_shape(), out_len);
    if signal.is_empty() || frame_length == 0 {
        return Ok(signal);
    }
    let block = n_frames * frame_length;

    #[cfg(feature = "parallel")]
    {
        if crate::config::use_parallel(n_frames * frames.batch_len()) {
            use rayon::prelude::*;
            signal
                .as_mut_slice()
                .par_chunks_mut(out_len)
                .zip(frames.as_slice().par_chunks(block))
                .for_each(|(out, row)| overlap_add_row(row, out, frame_length, frame_step));
            return Ok(signal);
        }
    }

    for (out, row) in signal
        .as_mut_slice()
        .chunks_exact_mut(out_len)
        .zip(frames.as_slice().chunks_exact(block))
    {
        overlap_add_row(row, out, frame_length, frame_step);
    }
    Ok(signal)
}

/// Overlap-add one row of frame-major `frames` into `out`.
pub fn overlap_add_row<T: Float>(frames: &[T], out: &mut [T], frame_length: usize, frame_step: usize) {
    for (i, frame) in frames.chunks_exact(frame_length).enumerate() {
        let start = i * frame_step;
        for (acc, &x) in out[start..start + frame_length].iter_mut().zip(frame.iter()) {
            *acc += x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(10, 4, 2), 4);
        assert_eq!(frame_count(11, 4, 2), 4);
        assert_eq!(frame_count(4, 4, 3), 1);
        assert_eq!(frame_count(3, 4, 1), 0);
        assert_eq!(frame_count(20, 4, 8), 3);
    }

    #[test]
    fn test_frames_are_signal_slices() {
        let x: Vec<f32> = (0..10).map(|v| v as f32).collect();
        let frames = frame_extract(&Signal::mono(x.clone()), 4, 3).unwrap();
        assert_eq!(frames.shape(), vec![3, 4]);
        for i in 0..3 {
            assert_eq!(frames.frame(0, i), &x[i * 3..i * 3 + 4]);
        }
    }

    #[test]
    fn test_frame_extract_rejects_zero_params() {
        let s = Signal::mono(vec![0.0f32; 8]);
        assert_eq!(frame_extract(&s, 0, 2), Err(StdctError::InvalidFrameLength));
        assert_eq!(frame_extract(&s, 4, 0), Err(StdctError::InvalidFrameStep));
    }

    #[test]
    fn test_short_signal_has_no_frames() {
        let s = Signal::from_shape(&[2, 3], vec![1.0f64; 6]).unwrap();
        let frames = frame_extract(&s, 4, 1).unwrap();
        assert_eq!(frames.shape(), vec![2, 0, 4]);
        let back = overlap_add(&frames, 1).unwrap();
        assert_eq!(back.shape(), vec![2, 0]);
    }

    #[test]
    fn test_overlap_add_sums_overlaps() {
        let frames = Frames::tiled(&[1.0f64, 1.0, 1.0, 1.0], 3);
        let out = overlap_add(&frames, 2).unwrap();
        assert_eq!(out.as_slice(), &[1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_overlap_add_leaves_gaps() {
        let frames = Frames::tiled(&[1.0f32, 2.0], 2);
        let out = overlap_add(&frames, 3).unwrap();
        assert_eq!(out.as_slice(), &[1.0, 2.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_overlap_add_rejects_zero_step() {
        let frames = Frames::tiled(&[1.0f32, 2.0], 2);
        assert_eq!(overlap_add(&frames, 0), Err(StdctError::InvalidFrameStep));
    }

    #[test]
    fn test_deframed_len() {
        assert_eq!(deframed_len(0, 4, 2), Some(0));
        assert_eq!(deframed_len(3, 4, 2), Some(8));
        assert_eq!(deframed_len(1, 4, usize::MAX), Some(4));
        assert_eq!(deframed_len(2, 4, usize::MAX), None);
        assert_eq!(deframed_len(3, 4, usize::MAX / 2 + 1), None);
    }

    #[test]
    fn test_overlap_add_rejects_overflowing_step() {
        let frames = Frames::from_shape(&[2, 4], vec![1.0f64; 8]).unwrap();
        assert_eq!(overlap_add(&frames, usize::MAX), Err(StdctError::InvalidFrameStep));
        // a single frame never strides
        let single = Frames::from_shape(&[1, 4], vec![1.0f64; 4]).unwrap();
        assert_eq!(overlap_add(&single, usize::MAX).unwrap().n_samples(), 4);
    }
}
