use crate::backend::Backend;
use crate::dct::{self, DctPlanner};
use crate::num::Float;

/// Backend computing the DCT as a product with cached orthonormal cosine tables.
///
/// Available without `std`. Cost is O(N²) per frame, so prefer
/// [`super::FftBackend`] for long frames when `std` is available.
#[derive(Default)]
pub struct TableBackend<T: Float> {
    planner: DctPlanner<T>,
}

impl<T: Float> TableBackend<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing planner and its cached tables.
    pub fn with_planner(planner: DctPlanner<T>) -> Self {
        Self { planner }
    }

    pub fn planner(&self) -> &DctPlanner<T> {
        &self.planner
    }
}

impl<T: Float> Backend<T> for TableBackend<T> {
    fn dct_forward(&mut self, block: &mut [T], frame_length: usize) {
        dct::batch_ii(&mut self.planner, block, frame_length);
    }

    fn dct_inverse(&mut self, block: &mut [T], frame_length: usize) {
        dct::batch_iii(&mut self.planner, block, frame_length);
    }
}
