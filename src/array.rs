//! Owned, batch-aware sample and frame buffers.
//!
//! Both containers store a flat row-major buffer plus the shape of the
//! leading batch axes. A `Signal` with batch shape `[2, 3]` and 100 samples
//! has shape `[2, 3, 100]`; the `Frames` produced from it has shape
//! `[2, 3, n_frames, frame_length]`.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::StdctError;
use crate::num::Float;

fn batch_count(batch_shape: &[usize]) -> usize {
    batch_shape.iter().product()
}

/// Time-domain samples of shape `(..., n_samples)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T> {
    data: Vec<T>,
    batch_shape: Vec<usize>,
    n_samples: usize,
}

impl<T: Float> Signal<T> {
    /// Single unbatched signal.
    pub fn mono(samples: Vec<T>) -> Self {
        let n_samples = samples.len();
        Self {
            data: samples,
            batch_shape: Vec::new(),
            n_samples,
        }
    }

    /// Signal with an explicit full shape; the last axis is the sample axis.
    pub fn from_shape(shape: &[usize], data: Vec<T>) -> Result<Self, StdctError> {
        let (&n_samples, batch_shape) = shape.split_last().ok_or(StdctError::ShapeMismatch)?;
        if batch_count(batch_shape) * n_samples != data.len() {
            return Err(StdctError::ShapeMismatch);
        }
        Ok(Self {
            data,
            batch_shape: batch_shape.to_vec(),
            n_samples,
        })
    }

    /// Stack equal-length channels into a signal of shape `(channels.len(), n_samples)`.
    pub fn from_channels(channels: &[Vec<T>]) -> Result<Self, StdctError> {
        let n_samples = channels.first().map_or(0, Vec::len);
        if channels.iter().any(|c| c.len() != n_samples) {
            return Err(StdctError::ShapeMismatch);
        }
        Ok(Self {
            data: channels.concat(),
            batch_shape: vec![channels.len()],
            n_samples,
        })
    }

    pub(crate) fn zeros(batch_shape: &[usize], n_samples: usize) -> Self {
        Self {
            data: vec![T::zero(); batch_count(batch_shape) * n_samples],
            batch_shape: batch_shape.to_vec(),
            n_samples,
        }
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn batch_shape(&self) -> &[usize] {
        &self.batch_shape
    }

    /// Number of independent rows (product of the batch axes, `1` when unbatched).
    pub fn batch_len(&self) -> usize {
        batch_count(&self.batch_shape)
    }

    /// Full shape `[..batch, n_samples]`.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = self.batch_shape.clone();
        shape.push(self.n_samples);
        shape
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples of the `index`-th batch row (flattened batch index).
    pub fn channel(&self, index: usize) -> &[T] {
        &self.data[index * self.n_samples..(index + 1) * self.n_samples]
    }

    pub fn channel_mut(&mut self, index: usize) -> &mut [T] {
        &mut self.data[index * self.n_samples..(index + 1) * self.n_samples]
    }

    pub fn channels(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.batch_len()).map(move |b| self.channel(b))
    }

    /// Copy out one batch row as an unbatched signal.
    pub fn select(&self, index: usize) -> Self {
        Self::mono(self.channel(index).to_vec())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Float> From<Vec<T>> for Signal<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::mono(samples)
    }
}

/// Framed samples or DCT coefficients of shape `(..., n_frames, frame_length)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Frames<T> {
    data: Vec<T>,
    batch_shape: Vec<usize>,
    n_frames: usize,
    frame_length: usize,
}

impl<T: Float> Frames<T> {
    /// Frame block with an explicit shape `[..batch, n_frames, frame_length]`.
    pub fn from_shape(shape: &[usize], data: Vec<T>) -> Result<Self, StdctError> {
        if shape.len() < 2 {
            return Err(StdctError::ShapeMismatch);
        }
        let (batch_shape, frame_axes) = shape.split_at(shape.len() - 2);
        let (n_frames, frame_length) = (frame_axes[0], frame_axes[1]);
        if frame_length == 0 {
            return Err(StdctError::InvalidFrameLength);
        }
        if batch_count(batch_shape) * n_frames * frame_length != data.len() {
            return Err(StdctError::ShapeMismatch);
        }
        Ok(Self {
            data,
            batch_shape: batch_shape.to_vec(),
            n_frames,
            frame_length,
        })
    }

    /// Unbatched block from a column-major `(frame_length, n_frames)` buffer,
    /// the layout where each column is one frame.
    pub fn from_column_major(
        frame_length: usize,
        n_frames: usize,
        columns: &[T],
    ) -> Result<Self, StdctError> {
        if frame_length == 0 {
            return Err(StdctError::InvalidFrameLength);
        }
        if frame_length * n_frames != columns.len() {
            return Err(StdctError::ShapeMismatch);
        }
        let mut data = vec![T::zero(); columns.len()];
        for i in 0..n_frames {
            for k in 0..frame_length {
                data[i * frame_length + k] = columns[k * n_frames + i];
            }
        }
        Ok(Self {
            data,
            batch_shape: Vec::new(),
            n_frames,
            frame_length,
        })
    }

    pub(crate) fn zeros(batch_shape: &[usize], n_frames: usize, frame_length: usize) -> Self {
        Self {
            data: vec![T::zero(); batch_count(batch_shape) * n_frames * frame_length],
            batch_shape: batch_shape.to_vec(),
            n_frames,
            frame_length,
        }
    }

    /// `n_frames` copies of `frame`, unbatched.
    pub fn tiled(frame: &[T], n_frames: usize) -> Self {
        Self {
            data: frame.repeat(n_frames),
            batch_shape: Vec::new(),
            n_frames,
            frame_length: frame.len(),
        }
    }

    pub fn n_frames(&self) -> usize {
        self.n_frames
    }

    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    pub fn batch_shape(&self) -> &[usize] {
        &self.batch_shape
    }

    pub fn batch_len(&self) -> usize {
        batch_count(&self.batch_shape)
    }

    /// Full shape `[..batch, n_frames, frame_length]`.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = self.batch_shape.clone();
        shape.push(self.n_frames);
        shape.push(self.frame_length);
        shape
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All frames of one batch row, frame-major.
    pub fn batch(&self, index: usize) -> &[T] {
        let block = self.n_frames * self.frame_length;
        &self.data[index * block..(index + 1) * block]
    }

    pub fn batch_mut(&mut self, index: usize) -> &mut [T] {
        let block = self.n_frames * self.frame_length;
        &mut self.data[index * block..(index + 1) * block]
    }

    /// One frame (or coefficient vector) of one batch row.
    pub fn frame(&self, batch: usize, frame: usize) -> &[T] {
        let start = (batch * self.n_frames + frame) * self.frame_length;
        &self.data[start..start + self.frame_length]
    }

    pub fn frame_mut(&mut self, batch: usize, frame: usize) -> &mut [T] {
        let start = (batch * self.n_frames + frame) * self.frame_length;
        &mut self.data[start..start + self.frame_length]
    }

    /// Copy out one batch row as an unbatched block.
    pub fn select(&self, index: usize) -> Self {
        Self {
            data: self.batch(index).to_vec(),
            batch_shape: Vec::new(),
            n_frames: self.n_frames,
            frame_length: self.frame_length,
        }
    }

    /// One batch row transposed to `(frame_length, n_frames)`, row-major.
    pub fn to_column_major(&self, index: usize) -> Vec<T> {
        let block = self.batch(index);
        let mut out = vec![T::zero(); block.len()];
        for i in 0..self.n_frames {
            for k in 0..self.frame_length {
                out[k * self.n_frames + i] = block[i * self.frame_length + k];
            }
        }
        out
    }

    /// Multiply every frame by `window` elementwise.
    pub fn apply_window(&mut self, window: &[T]) {
        debug_assert_eq!(window.len(), self.frame_length);
        if self.frame_length == 0 {
            return;
        }
        for frame in self.data.chunks_exact_mut(self.frame_length) {
            for (x, &w) in frame.iter_mut().zip(window.iter()) {
                *x *= w;
            }
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}
