use ndarray::{ArrayD, IxDyn};

use super::CellAnchor;
use crate::error::{QueryError, Result};

/// A regular grid of cells addressed by integer indices.
///
/// Axis `k` of the grid indexes coordinate `k`: cell `(i, j)` is represented
/// by the point `(anchor(i), anchor(j))`.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    shape: &'a [usize],
    anchor: CellAnchor,
}

impl<'a> Grid<'a> {
    /// Creates a grid for a boundary of dimension `dim`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::DimensionMismatch` if `shape.len() != dim` and
    /// `QueryError::InvalidShape` if any extent is zero.
    pub fn new(shape: &'a [usize], anchor: CellAnchor, dim: usize) -> Result<Self> {
        if shape.len() != dim {
            return Err(QueryError::DimensionMismatch {
                expected: dim,
                found: shape.len(),
            }
            .into());
        }
        if shape.contains(&0) {
            return Err(QueryError::InvalidShape {
                shape: shape.to_vec(),
            }
            .into());
        }
        Ok(Self { shape, anchor })
    }

    /// The grid shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.shape
    }

    /// How cells map to representative points.
    #[must_use]
    pub fn anchor(&self) -> CellAnchor {
        self.anchor
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Representative points of every cell, as a `(*shape, dim)` array.
    #[must_use]
    pub fn centers(&self) -> ArrayD<f64> {
        let dim = self.shape.len();
        let mut full = self.shape.to_vec();
        full.push(dim);
        ArrayD::from_shape_fn(IxDyn(&full), |index| self.anchor.coordinate(index[index[dim]]))
    }
}
