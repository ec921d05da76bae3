mod parallel;
pub(crate) mod probe;
mod ray_cast;

pub use parallel::ParallelRayCastTester;
pub use ray_cast::RayCastTester;

use ndarray::{ArrayD, ArrayViewD, IxDyn};

use crate::error::{QueryError, Result};
use crate::geometry::Boundary;
use crate::math::DEFAULT_EPSILON;

/// Parameters controlling containment queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainmentParams {
    /// Per-axis distance under which a point is treated as lying on the
    /// boundary. On-boundary points count as inside.
    pub epsilon: f64,
}

impl Default for ContainmentParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ContainmentParams {
    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidParameters` if `epsilon` is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(QueryError::InvalidParameters(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            ))
            .into());
        }
        Ok(())
    }
}

/// Decides whether points lie inside a [`Boundary`] under the even-odd rule.
///
/// Implementations are interchangeable: they must classify every point
/// identically and differ only in how the work is scheduled.
pub trait ContainmentTester: Sync {
    /// Tests a single point given as `dim` coordinates.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::DimensionMismatch` if `point.len()` differs from
    /// the boundary's dimension.
    fn contains(&self, point: &[f64], boundary: &Boundary) -> Result<bool>;

    /// Tests a batch of points of shape `(..., dim)`, returning a mask with
    /// the batch's leading shape.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::DimensionMismatch` if the trailing axis is not
    /// the boundary's dimension.
    fn inside(&self, points: ArrayViewD<'_, f64>, boundary: &Boundary) -> Result<ArrayD<bool>>;
}

/// Validates a `(..., dim)` batch against `boundary` and returns its leading shape.
pub(crate) fn batch_shape(points: &ArrayViewD<'_, f64>, boundary: &Boundary) -> Result<IxDyn> {
    let shape = points.shape();
    match shape.split_last() {
        Some((&dim, batch)) if dim == boundary.dim() => Ok(IxDyn(batch)),
        Some((&dim, _)) => Err(QueryError::DimensionMismatch {
            expected: boundary.dim(),
            found: dim,
        }
        .into()),
        None => Err(QueryError::DimensionMismatch {
            expected: boundary.dim(),
            found: 0,
        }
        .into()),
    }
}

pub(crate) fn check_point(point: &[f64], boundary: &Boundary) -> Result<()> {
    if point.len() != boundary.dim() {
        return Err(QueryError::DimensionMismatch {
            expected: boundary.dim(),
            found: point.len(),
        }
        .into());
    }
    Ok(())
}
