//! Point-in-boundary testing and grid rasterization for closed polygons (2D)
//! and closed surfaces (3D).
//!
//! Vertices are expected in grid coordinates already; the caller applies any
//! affine or unit conversion first.

pub mod containment;
pub mod error;
pub mod geometry;
pub mod math;
pub mod raster;

#[cfg(test)]
mod test_support;

pub use containment::{ContainmentParams, ContainmentTester, ParallelRayCastTester, RayCastTester};
pub use error::{GeomaskError, GeometryError, QueryError, Result};
pub use geometry::{Boundary, Curve, Surface};
pub use raster::{CellAnchor, Grid, RasterMethod, RasterParams, Rasterize};

use ndarray::{ArrayD, ArrayViewD};

/// Tests whether each point of a `(..., dim)` batch lies inside `boundary`,
/// using the reference tester with default parameters.
///
/// # Errors
///
/// Returns `QueryError::DimensionMismatch` if the trailing axis of `points`
/// is not the boundary's dimension.
pub fn inside(points: ArrayViewD<'_, f64>, boundary: &Boundary) -> Result<ArrayD<bool>> {
    RayCastTester::default().inside(points, boundary)
}

/// Rasterizes the interior of `boundary` onto a grid of the given shape with
/// default parameters (scanline, cell centers at `i + 0.5`).
///
/// # Errors
///
/// Returns `QueryError::DimensionMismatch` if `shape.len()` is not the
/// boundary's dimension and `QueryError::InvalidShape` for a zero extent.
pub fn rasterize(shape: &[usize], boundary: &Boundary) -> Result<ArrayD<bool>> {
    Rasterize::new(shape).execute(boundary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn three_d_points_against_2d_boundary() {
        let vertices = array![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]];
        let boundary = Boundary::build(vertices.view(), None).unwrap();
        let points = Array3::<f64>::ones((2, 2, 3)).into_dyn();
        let err = inside(points.view(), &boundary).unwrap_err();
        assert!(matches!(
            err,
            GeomaskError::Query(QueryError::DimensionMismatch { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn rasterize_agrees_with_inside() {
        let vertices = array![[0.5, 0.2], [5.7, 1.1], [3.3, 2.4], [4.9, 5.8], [0.8, 3.9]];
        let boundary = Boundary::build(vertices.view(), None).unwrap();
        let mask = rasterize(&[6, 6], &boundary).unwrap();
        let centers = Grid::new(&[6, 6], CellAnchor::Center, 2).unwrap().centers();
        assert_eq!(mask, inside(centers.view(), &boundary).unwrap());
    }

    #[test]
    fn error_messages() {
        let err = GeomaskError::from(QueryError::InvalidShape { shape: vec![3, 0] });
        assert_eq!(err.to_string(), "invalid grid shape [3, 0]: every extent must be positive");
        let err = GeomaskError::from(GeometryError::UnsupportedDimension { dim: 4 });
        assert_eq!(err.to_string(), "unsupported dimension 4, expected 2 or 3");
    }
}
