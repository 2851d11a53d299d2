//! Short-Time Discrete Cosine Transform (STDCT) and its inverse.
//!
//! `sdct` frames a signal, applies an analysis window and takes the
//! orthonormal DCT-II of every frame. `isdct` takes the DCT-III of every
//! coefficient vector, overlap-adds the frames and, when a window is given,
//! divides by the overlap-added window so that `isdct(sdct(x)) ≈ x`.
//!
//! # Example
//! ```
//! use stdct::{isdct, sdct, IsdctOptions, Signal, WindowKind};
//!
//! let x: Vec<f64> = (0..4096).map(|i| (i as f64 * 0.01).sin() * 0.5).collect();
//! let coeffs = sdct(&Signal::mono(x.clone()), 256, 128, Some(WindowKind::Hamming)).unwrap();
//! assert_eq!(coeffs.frame_length(), 256);
//! let y = isdct(&coeffs, &IsdctOptions::new(128)).unwrap();
//! for (a, b) in y.as_slice().iter().zip(x.iter()) {
//!     assert!((a - b).abs() < 1e-9);
//! }
//! ```

use crate::array::{Frames, Signal};
use crate::backend::{Backend, TableBackend};
use crate::error::StdctError;
use crate::num::Float;
use crate::window::WindowKind;

/// Parameters of the forward transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdctOptions {
    /// Window length and DCT length in samples.
    pub frame_length: usize,
    /// Samples between the starts of adjacent frames.
    pub frame_step: usize,
    /// Analysis window; `None` disables windowing.
    pub window: Option<WindowKind>,
}

impl SdctOptions {
    /// Options with the default Hamming window.
    pub fn new(frame_length: usize, frame_step: usize) -> Self {
        Self {
            frame_length,
            frame_step,
            window: Some(WindowKind::Hamming),
        }
    }

    pub fn window(mut self, window: Option<WindowKind>) -> Self {
        self.window = window;
        self
    }
}

/// Parameters of the inverse transform.
///
/// `frame_step` must equal the value the coefficients were produced with;
/// this cannot be checked and a different step silently yields a wrong signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsdctOptions {
    pub frame_step: usize,
    /// Optional consistency check against the coefficient length.
    pub frame_length: Option<usize>,
    /// Window used to normalize the synthesis; `None` returns the raw overlap-add.
    pub window: Option<WindowKind>,
}

impl IsdctOptions {
    /// Options with no frame length check and the default Hamming window.
    pub fn new(frame_step: usize) -> Self {
        Self {
            frame_step,
            frame_length: None,
            window: Some(WindowKind::Hamming),
        }
    }

    pub fn frame_length(mut self, frame_length: usize) -> Self {
        self.frame_length = Some(frame_length);
        self
    }

    pub fn window(mut self, window: Option<WindowKind>) -> Self {
        self.window = window;
        self
    }
}

/// STDCT engine bound to one numeric [`Backend`].
///
/// Reusing an engine reuses the backend's cached tables or FFT plans.
pub struct Stdct<B> {
    backend: B,
}

impl<T: Float> Default for Stdct<TableBackend<T>> {
    fn default() -> Self {
        Self::with_backend(TableBackend::new())
    }
}

impl<T: Float> Stdct<TableBackend<T>> {
    /// Engine using the cosine-table backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B> Stdct<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Forward transform of every batch row of `signal`.
    ///
    /// The result has shape `(..., n_frames, frame_length)` with
    /// `n_frames = (n_samples - frame_length) / frame_step + 1`, or zero
    /// frames when the signal is shorter than one frame.
    pub fn sdct<T: Float>(
        &mut self,
        signal: &Signal<T>,
        options: &SdctOptions,
    ) -> Result<Frames<T>, StdctError>
    where
        B: Backend<T>,
    {
        let SdctOptions {
            frame_length,
            frame_step,
            window,
        } = *options;
        let mut frames = self
            .backend
            .frame_extract(signal, frame_length, frame_step)?;
        vlog!(
            debug,
            "sdct: shape {:?} -> {:?}, step {}, window {:?}",
            signal.shape(),
            frames.shape(),
            frame_step,
            window
        );
        if let Some(kind) = window {
            let window = self.backend.make_window(kind, frame_length, true);
            frames.apply_window(&window);
        }
        self.backend.dct_forward(frames.as_mut_slice(), frame_length);
        Ok(frames)
    }

    /// Inverse transform of every batch row of `dct`.
    ///
    /// Output rows have `(n_frames - 1) * frame_step + frame_length` samples.
    /// With a window, samples no frame covers with non-zero weight come out
    /// as `NaN` or infinite.
    pub fn isdct<T: Float>(
        &mut self,
        dct: &Frames<T>,
        options: &IsdctOptions,
    ) -> Result<Signal<T>, StdctError>
    where
        B: Backend<T>,
    {
        let IsdctOptions {
            frame_step,
            frame_length,
            window,
        } = *options;
        if frame_step == 0 {
            return Err(StdctError::InvalidFrameStep);
        }
        let actual = dct.frame_length();
        if actual == 0 {
            return Err(StdctError::InvalidFrameLength);
        }
        if let Some(expected) = frame_length {
            if expected != actual {
                return Err(StdctError::FrameLengthMismatch { expected, actual });
            }
        }
        vlog!(
            debug,
            "isdct: shape {:?}, step {}, window {:?}",
            dct.shape(),
            frame_step,
            window
        );

        let mut frames = dct.clone();
        self.backend.dct_inverse(frames.as_mut_slice(), actual);
        let mut signal = self.backend.overlap_add(&frames, frame_step)?;

        let Some(kind) = window else {
            return Ok(signal);
        };
        if frame_step > actual {
            vlog!(
                warn,
                "isdct: frame_step {} exceeds frame_length {}, gaps divide by zero",
                frame_step,
                actual
            );
        }
        let window = self.backend.make_window(kind, actual, true);
        let window_frames = Frames::tiled(&window, dct.n_frames());
        let denominator = self.backend.overlap_add(&window_frames, frame_step)?;
        let denominator = denominator.as_slice();
        for b in 0..signal.batch_len() {
            for (x, &w) in signal.channel_mut(b).iter_mut().zip(denominator.iter()) {
                *x /= w;
            }
        }
        Ok(signal)
    }
}

/// Forward STDCT with the cosine-table backend.
///
/// `window` defaults to Hamming in the option builders; pass `None` to skip
/// windowing.
pub fn sdct<T: Float>(
    signal: &Signal<T>,
    frame_length: usize,
    frame_step: usize,
    window: Option<WindowKind>,
) -> Result<Frames<T>, StdctError> {
    let options = SdctOptions::new(frame_length, frame_step).window(window);
    Stdct::<TableBackend<T>>::new().sdct(signal, &options)
}

/// Inverse STDCT with the cosine-table backend.
pub fn isdct<T: Float>(dct: &Frames<T>, options: &IsdctOptions) -> Result<Signal<T>, StdctError> {
    Stdct::<TableBackend<T>>::new().isdct(dct, options)
}
