//! Numeric backends supplying the DCT, window, framing and overlap-add primitives.
//!
//! The STDCT pipeline in [`crate::stdct`] only talks to a [`Backend`]. Two
//! implementations ship with the crate:
//!
//! - [`TableBackend`]: cached orthonormal cosine tables, `no_std + alloc`.
//! - [`FftBackend`]: DCT through an N-point complex FFT from `rustfft`
//!   (feature `rustfft`).

use alloc::vec::Vec;

use crate::array::{Frames, Signal};
use crate::error::StdctError;
use crate::num::Float;
use crate::window::WindowKind;

mod table;
pub use table::TableBackend;

#[cfg(feature = "rustfft")]
mod fft;
#[cfg(feature = "rustfft")]
pub use fft::FftBackend;

/// Capability set required by [`crate::stdct::Stdct`].
///
/// `dct_forward` and `dct_inverse` operate in place on a frame-major block
/// whose length is a multiple of `frame_length`; each chunk is transformed
/// independently with the orthonormal DCT-II / DCT-III. The remaining three
/// operations default to the crate's own implementations.
pub trait Backend<T: Float> {
    /// Orthonormal DCT-II of every `frame_length` chunk of `block`.
    fn dct_forward(&mut self, block: &mut [T], frame_length: usize);

    /// Orthonormal DCT-III of every `frame_length` chunk of `block`.
    fn dct_inverse(&mut self, block: &mut [T], frame_length: usize);

    fn make_window(&mut self, kind: WindowKind, len: usize, periodic: bool) -> Vec<T> {
        crate::window::make_window(kind, len, periodic)
    }

    fn frame_extract(
        &mut self,
        signal: &Signal<T>,
        frame_length: usize,
        frame_step: usize,
    ) -> Result<Frames<T>, StdctError> {
        crate::frame::frame_extract(signal, frame_length, frame_step)
    }

    fn overlap_add(&mut self, frames: &Frames<T>, frame_step: usize) -> Result<Signal<T>, StdctError> {
        crate::frame::overlap_add(frames, frame_step)
    }
}

impl<T: Float, B: Backend<T> + ?Sized> Backend<T> for &mut B {
    fn dct_forward(&mut self, block: &mut [T], frame_length: usize) {
        (**self).dct_forward(block, frame_length)
    }

    fn dct_inverse(&mut self, block: &mut [T], frame_length: usize) {
        (**self).dct_inverse(block, frame_length)
    }

    fn make_window(&mut self, kind: WindowKind, len: usize, periodic: bool) -> Vec<T> {
        (**self).make_window(kind, len, periodic)
    }

    fn frame_extract(
        &mut self,
        signal: &Signal<T>,
        frame_length: usize,
        frame_step: usize,
    ) -> Result<Frames<T>, StdctError> {
        (**self).frame_extract(signal, frame_length, frame_step)
    }

    fn overlap_add(&mut self, frames: &Frames<T>, frame_step: usize) -> Result<Signal<T>, StdctError> {
        (**self).overlap_add(frames, frame_step)
    }
}
