use ndarray::{ArrayD, ArrayViewD, Axis, Dimension, Zip};
use tracing::trace;

use super::probe::{contains_lane, contains_point};
use super::{batch_shape, check_point, ContainmentParams, ContainmentTester};
use crate::error::Result;
use crate::geometry::Boundary;

/// Data-parallel drop-in for [`RayCastTester`](super::RayCastTester).
///
/// Points are split across the rayon thread pool; each worker writes a
/// disjoint part of the output mask. Classification is identical to the
/// reference tester.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelRayCastTester {
    params: ContainmentParams,
}

impl ParallelRayCastTester {
    /// Creates a tester with the given parameters.
    #[must_use]
    pub fn new(params: ContainmentParams) -> Self {
        Self { params }
    }

    /// The parameters used by this tester.
    #[must_use]
    pub fn params(&self) -> &ContainmentParams {
        &self.params
    }
}

impl ContainmentTester for ParallelRayCastTester {
    fn contains(&self, point: &[f64], boundary: &Boundary) -> Result<bool> {
        self.params.validate()?;
        check_point(point, boundary)?;
        Ok(contains_point(boundary, point, self.params.epsilon))
    }

    fn inside(&self, points: ArrayViewD<'_, f64>, boundary: &Boundary) -> Result<ArrayD<bool>> {
        self.params.validate()?;
        let batch = batch_shape(&points, boundary)?;
        let epsilon = self.params.epsilon;
        trace!(
            points = batch.size(),
            threads = rayon::current_num_threads(),
            "ray casting batch in parallel"
        );

        let mut mask = ArrayD::from_elem(batch, false);
        let axis = Axis(points.ndim() - 1);
        Zip::from(&mut mask)
            .and(points.lanes(axis))
            .par_for_each(|cell, point| *cell = contains_lane(boundary, point, epsilon));
        Ok(mask)
    }
}
