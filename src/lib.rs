//! # stdct - Short-Time Discrete Cosine Transform for Rust
//!
//! Block-wise, windowed, overlap-added DCT analysis of audio-like signals and
//! its inverse. Analogous to an STFT, but every frame is transformed with the
//! real-valued orthonormal DCT-II, and synthesis uses the matching DCT-III.
//!
//! ## Features
//!
//! - **Exact inverse**: `isdct(sdct(x))` reproduces `x` up to rounding for any
//!   `frame_step <= frame_length` under the default Hamming window
//! - **Batched signals**: arbitrary leading batch axes, bit-identical to
//!   transforming each row on its own
//! - **Two numeric backends** behind one [`backend::Backend`] trait: cached
//!   cosine tables (`no_std`) and an FFT-based DCT using `rustfft`
//! - **f32 and f64** samples
//!
//! ## Cargo Features
//!
//! - `std` (default): Enable standard library features
//! - `rustfft` (default): FFT-based [`backend::FftBackend`]
//! - `parallel`: Split frames and batch rows across threads with Rayon
//! - `verbose-logging`: Emit `log` records from the transform entry points
//!
//! ## Example
//!
//! ```
//! use stdct::{isdct, sdct, IsdctOptions, Signal, WindowKind};
//!
//! let x: Vec<f32> = (0..2048).map(|i| (i as f32 * 0.02).sin() * 0.25).collect();
//! let coeffs = sdct(&Signal::mono(x), 512, 256, Some(WindowKind::Hamming)).unwrap();
//! assert_eq!(coeffs.shape(), vec![7, 512]);
//! let y = isdct(&coeffs, &IsdctOptions::new(256)).unwrap();
//! assert_eq!(y.n_samples(), 2048);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 (https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license (https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Logging shim: forwards to `log` with `verbose-logging`, otherwise only
// type-checks its arguments without evaluating them.
#[cfg(feature = "verbose-logging")]
macro_rules! vlog {
    ($level:ident, $($arg:tt)*) => {
        ::log::$level!($($arg)*)
    };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! vlog {
    ($level:ident, $($arg:tt)*) => {{
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

/// Minimal float trait shared by all transforms
pub mod num;

/// Error type for every fallible operation
pub mod error;

/// Batch-aware signal and frame containers
pub mod array;

/// Window functions
///
/// Hamming, Hann, Blackman, Bartlett and boxcar windows, periodic or symmetric.
pub mod window;

/// Orthonormal Discrete Cosine Transform (DCT-II / DCT-III)
pub mod dct;

/// Framing and overlap-add
pub mod frame;

/// Numeric backends for the STDCT pipeline
pub mod backend;

/// Short-Time Discrete Cosine Transform and its inverse
pub mod stdct;

/// Tuning for the `parallel` feature
#[cfg(feature = "parallel")]
pub mod config;

pub use array::{Frames, Signal};
pub use backend::{Backend, TableBackend};
#[cfg(feature = "rustfft")]
pub use backend::FftBackend;
pub use error::StdctError;
pub use num::Float;
pub use stdct::{isdct, sdct, IsdctOptions, SdctOptions, Stdct};
pub use window::WindowKind;

#[cfg(all(test, not(feature = "verbose-logging")))]
mod tests {
    use core::cell::Cell;

    #[test]
    fn disabled_vlog_skips_its_arguments() {
        let calls = Cell::new(0usize);
        let tick = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        vlog!(debug, "value {}", tick());
        vlog!(warn, "value {} {}", tick(), tick());
        assert_eq!(calls.get(), 0);
    }
}
