use ndarray::{ArrayD, ArrayViewD, Axis, Dimension, Zip};
use tracing::trace;

use super::probe::{contains_lane, contains_point};
use super::{batch_shape, check_point, ContainmentParams, ContainmentTester};
use crate::error::Result;
use crate::geometry::Boundary;

/// Reference containment tester: casts a ray along `+x` from each point in
/// turn and counts crossings under the even-odd rule.
///
/// In 2D an edge crosses when the point's y lies in the edge's half-open
/// y-extent and the intersection lies strictly to the right. In 3D facets
/// are fan-triangulated and the ray is symbolically perturbed so that rays
/// through edges, vertices or coplanar facets are still counted consistently.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayCastTester {
    params: ContainmentParams,
}

impl RayCastTester {
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

impl ContainmentTester for RayCastTester {
    fn contains(&self, point: &[f64], boundary: &Boundary) -> Result<bool> {
        self.params.validate()?;
        check_point(point, boundary)?;
        Ok(contains_point(boundary, point, self.params.epsilon))
    }

    fn inside(&self, points: ArrayViewD<'_, f64>, boundary: &Boundary) -> Result<ArrayD<bool>> {
        self.params.validate()?;
        let batch = batch_shape(&points, boundary)?;
        let epsilon = self.params.epsilon;
        trace!(points = batch.size(), faces = boundary.num_faces(), "ray casting batch");

        let mut mask = ArrayD::from_elem(batch, false);
        let axis = Axis(points.ndim() - 1);
        Zip::from(&mut mask)
            .and(points.lanes(axis))
            .for_each(|cell, point| *cell = contains_lane(boundary, point, epsilon));
        Ok(mask)
    }
}
