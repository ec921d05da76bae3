mod grid;
mod scanline;

pub use grid::Grid;

use ndarray::ArrayD;
use tracing::debug;

use crate::containment::{ContainmentParams, ContainmentTester, ParallelRayCastTester, RayCastTester};
use crate::error::Result;
use crate::geometry::Boundary;

/// Which point represents a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAnchor {
    /// Cell `i` is represented by `i + 0.5`.
    #[default]
    Center,
    /// Cell `i` is represented by `i`.
    Corner,
}

impl CellAnchor {
    /// Offset added to an integer index.
    #[must_use]
    pub fn offset(self) -> f64 {
        match self {
            Self::Center => 0.5,
            Self::Corner => 0.0,
        }
    }

    /// Coordinate of the representative point of cell `index` along one axis.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn coordinate(self, index: usize) -> f64 {
        index as f64 + self.offset()
    }
}

/// How the mask is computed. Both methods produce identical masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMethod {
    /// Gather crossings once per grid line and fill whole runs of cells.
    #[default]
    Scanline,
    /// Test every cell center independently with a [`ContainmentTester`].
    Naive,
}

/// Parameters controlling rasterization.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterParams {
    /// Containment tolerance, shared by both methods.
    pub containment: ContainmentParams,
    /// Representative point of each cell.
    pub anchor: CellAnchor,
    /// Scanline or per-cell evaluation.
    pub method: RasterMethod,
    /// Spread lines (scanline) or points (naive) over the rayon pool.
    pub parallel: bool,
}

/// Rasterizes the interior of a boundary onto a regular grid.
///
/// Cell `(i, j, ...)` of the resulting mask is `true` when its representative
/// point (see [`CellAnchor`]) is inside or on the boundary.
pub struct Rasterize {
    shape: Vec<usize>,
    params: RasterParams,
}

impl Rasterize {
    /// Creates a new `Rasterize` operation with default parameters.
    #[must_use]
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            params: RasterParams::default(),
        }
    }

    /// Sets custom rasterization parameters.
    #[must_use]
    pub fn with_params(mut self, params: RasterParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning a boolean mask with the grid's shape.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::DimensionMismatch` if the shape's length differs
    /// from the boundary's dimension, `QueryError::InvalidShape` for a zero
    /// extent, and `QueryError::InvalidParameters` for a bad epsilon.
    pub fn execute(&self, boundary: &Boundary) -> Result<ArrayD<bool>> {
        let containment = self.params.containment;
        match (self.params.method, self.params.parallel) {
            (RasterMethod::Naive, false) => self.execute_with(boundary, &RayCastTester::new(containment)),
            (RasterMethod::Naive, true) => self.execute_with(boundary, &ParallelRayCastTester::new(containment)),
            (RasterMethod::Scanline, parallel) => {
                containment.validate()?;
                let grid = Grid::new(&self.shape, self.params.anchor, boundary.dim())?;
                debug!(shape = ?self.shape, faces = boundary.num_faces(), parallel, "scanline rasterization");
                let mask = scanline::rasterize(boundary, &grid, containment.epsilon, parallel);
                debug!(occupied = mask.iter().filter(|&&c| c).count(), "rasterized");
                Ok(mask)
            }
        }
    }

    /// Rasterizes by testing every cell center with `tester` in one batch.
    ///
    /// The tester's own parameters apply; `params.method` and
    /// `params.parallel` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::DimensionMismatch` or `QueryError::InvalidShape`
    /// for a bad shape, and any error reported by the tester.
    pub fn execute_with(&self, boundary: &Boundary, tester: &dyn ContainmentTester) -> Result<ArrayD<bool>> {
        let grid = Grid::new(&self.shape, self.params.anchor, boundary.dim())?;
        debug!(shape = ?self.shape, cells = grid.len(), faces = boundary.num_faces(), "naive rasterization");
        let centers = grid.centers();
        let mask = tester.inside(centers.view(), boundary)?;
        debug!(occupied = mask.iter().filter(|&&c| c).count(), "rasterized");
        Ok(mask)
    }
}
