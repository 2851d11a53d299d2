//! Common window functions for STDCT analysis and synthesis

use alloc::string::ToString;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

use libm::{cos, fabs};

use crate::error::StdctError;
use crate::num::Float;

/// Named window functions understood by [`make_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowKind {
    #[default]
    Hamming,
    Hann,
    Blackman,
    Bartlett,
    /// All ones.
    Boxcar,
}

impl WindowKind {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            WindowKind::Hamming => "hamming",
            WindowKind::Hann => "hann",
            WindowKind::Blackman => "blackman",
            WindowKind::Bartlett => "bartlett",
            WindowKind::Boxcar => "boxcar",
        }
    }

    // Value at `i` of an `n`-point generalized window; periodic windows pass
    // `n = len`, symmetric ones `n = len - 1`.
    fn sample(self, i: usize, n: usize) -> f64 {
        let x = i as f64 / n as f64;
        match self {
            WindowKind::Hamming => 0.54 - 0.46 * cos(2.0 * PI * x),
            WindowKind::Hann => 0.5 - 0.5 * cos(2.0 * PI * x),
            WindowKind::Blackman => 0.42 - 0.5 * cos(2.0 * PI * x) + 0.08 * cos(4.0 * PI * x),
            WindowKind::Bartlett => 1.0 - fabs(2.0 * x - 1.0),
            WindowKind::Boxcar => 1.0,
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = StdctError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "hamming" | "hamm" => WindowKind::Hamming,
            "hann" | "hanning" => WindowKind::Hann,
            "blackman" | "black" => WindowKind::Blackman,
            "bartlett" | "bart" => WindowKind::Bartlett,
            "boxcar" | "box" | "rectangular" | "ones" => WindowKind::Boxcar,
            _ => return Err(StdctError::UnknownWindow(s.to_string())),
        };
        Ok(kind)
    }
}

/// Generate a window of length `len`, cast to `T`.
///
/// `periodic` selects the DFT-even ("fftbins") convention used for spectral
/// analysis; otherwise the window is symmetric. A length-one window is `[1.0]`
/// in either convention.
pub fn make_window<T: Float>(kind: WindowKind, len: usize, periodic: bool) -> Vec<T> {
    match len {
        0 => Vec::new(),
        1 => alloc::vec![T::one()],
        _ => {
            let n = if periodic { len } else { len - 1 };
            (0..len).map(|i| T::from_f64(kind.sample(i, n))).collect()
        }
    }
}

/// Generate a window from its name; unknown names fail with [`StdctError::UnknownWindow`].
pub fn window_by_name<T: Float>(
    name: &str,
    len: usize,
    periodic: bool,
) -> Result<Vec<T>, StdctError> {
    let kind: WindowKind = name.parse()?;
    Ok(make_window(kind, len, periodic))
}

/// Periodic Hamming window of length `len`.
pub fn hamming<T: Float>(len: usize) -> Vec<T> {
    make_window(WindowKind::Hamming, len, true)
}

/// Periodic Hann window of length `len`.
pub fn hann<T: Float>(len: usize) -> Vec<T> {
    make_window(WindowKind::Hann, len, true)
}
