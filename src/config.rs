//! Process-wide tuning for the `parallel` feature.
//!
//! The minimum number of frames before work is split across Rayon threads
//! is resolved in this order: [`set_parallel_min_frames`], the
//! `STDCT_PAR_MIN_FRAMES` environment variable, then a default of four
//! frames per logical core.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Environment variable overriding the parallel frame threshold.
pub const PAR_MIN_FRAMES_ENV: &str = "STDCT_PAR_MIN_FRAMES";

/// Frames scheduled per core by the default heuristic.
const FRAMES_PER_CORE: usize = 4;

/// `0` means no override.
static PARALLEL_MIN_FRAMES_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static PARALLEL_MIN_FRAMES_ENV: OnceLock<usize> = OnceLock::new();

fn env_min_frames() -> usize {
    *PARALLEL_MIN_FRAMES_ENV.get_or_init(|| {
        let from_env = std::env::var(PAR_MIN_FRAMES_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&v| v != 0);
        match from_env {
            Some(v) => v,
            None => {
                let threshold = num_cpus::get().max(1) * FRAMES_PER_CORE;
                vlog!(debug, "parallel frame threshold defaults to {}", threshold);
                threshold
            }
        }
    })
}

/// Set a custom minimum frame count for parallel processing.
///
/// Passing `0` reverts to the environment variable or built-in heuristic.
pub fn set_parallel_min_frames(frames: usize) {
    PARALLEL_MIN_FRAMES_OVERRIDE.store(frames, Ordering::Relaxed);
}

/// Current minimum frame count for parallel processing.
pub fn parallel_min_frames() -> usize {
    match PARALLEL_MIN_FRAMES_OVERRIDE.load(Ordering::Relaxed) {
        0 => env_min_frames(),
        v => v,
    }
}

#[inline]
pub(crate) fn use_parallel(frames: usize) -> bool {
    frames >= parallel_min_frames()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_takes_precedence_and_resets() {
        set_parallel_min_frames(3);
        assert_eq!(parallel_min_frames(), 3);
        assert!(use_parallel(3));
        assert!(!use_parallel(2));
        set_parallel_min_frames(0);
        assert!(parallel_min_frames() > 0);
    }
}
