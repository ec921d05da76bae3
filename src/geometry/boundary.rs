use ndarray::ArrayView2;
use tracing::debug;

use super::{Curve, Surface};
use crate::error::{GeometryError, Result};
use crate::math::{Bounds, Point2, Point3};

/// A closed boundary enclosing a region: a curve in 2D, a surface in 3D.
///
/// Built fresh from caller-supplied arrays and never mutated afterwards.
#[derive(Debug, Clone)]
pub enum Boundary {
    Curve(Curve),
    Surface(Surface),
}

impl Boundary {
    /// Builds a boundary from a `(V, dim)` vertex array and an optional
    /// `(F, k)` face array.
    ///
    /// Without faces the vertices are taken as an ordered closed loop
    /// (see [`Boundary::from_ordered_loop`]).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` if `dim` is not 2 or 3
    /// (or is 3 without faces), and `GeometryError::InvalidFace` for faces
    /// that are out of range or degenerate.
    pub fn build(vertices: ArrayView2<'_, f64>, faces: Option<ArrayView2<'_, usize>>) -> Result<Self> {
        match faces {
            Some(faces) => Self::from_faces(vertices, faces),
            None => Self::from_ordered_loop(vertices),
        }
    }

    /// Builds a boundary from vertices and an explicit face list.
    ///
    /// In 2D each face row is one edge `(from, to)`. In 3D each row is one
    /// polygonal facet with at least three vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` if `dim` is not 2 or 3,
    /// and `GeometryError::InvalidFace` for faces with the wrong arity, an
    /// out-of-range vertex index, or fewer than `dim` distinct vertices.
    pub fn from_faces(vertices: ArrayView2<'_, f64>, faces: ArrayView2<'_, usize>) -> Result<Self> {
        let boundary = match vertices.ncols() {
            2 => {
                if faces.nrows() > 0 && faces.ncols() != 2 {
                    return Err(GeometryError::InvalidFace {
                        face: 0,
                        reason: format!("2D faces must have 2 vertices, got {}", faces.ncols()),
                    }
                    .into());
                }
                let edges = faces.rows().into_iter().map(|row| [row[0], row[1]]).collect();
                Self::Curve(Curve::new(points_2d(vertices), edges)?)
            }
            3 => {
                let facets = faces.rows().into_iter().map(|row| row.to_vec()).collect();
                Self::Surface(Surface::new(points_3d(vertices), facets)?)
            }
            dim => return Err(GeometryError::UnsupportedDimension { dim }.into()),
        };
        debug!(
            dim = boundary.dim(),
            vertices = boundary.num_vertices(),
            faces = boundary.num_faces(),
            "built boundary from faces"
        );
        Ok(boundary)
    }

    /// Builds a 2D boundary by joining consecutive vertices and closing the
    /// loop from the last vertex back to the first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedDimension` unless `dim` is 2, and
    /// `GeometryError::InvalidFace` for a single-vertex loop.
    pub fn from_ordered_loop(vertices: ArrayView2<'_, f64>) -> Result<Self> {
        let dim = vertices.ncols();
        if dim != 2 {
            return Err(GeometryError::UnsupportedDimension { dim }.into());
        }
        let curve = Curve::closed(points_2d(vertices))?;
        debug!(vertices = curve.vertices().len(), "built boundary from ordered loop");
        Ok(Self::Curve(curve))
    }

    /// Spatial dimension of the boundary (2 or 3).
    #[must_use]
    pub fn dim(&self) -> usize {
        match self {
            Self::Curve(_) => 2,
            Self::Surface(_) => 3,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        match self {
            Self::Curve(c) => c.vertices().len(),
            Self::Surface(s) => s.vertices().len(),
        }
    }

    /// Number of faces (edges in 2D, facets in 3D).
    #[must_use]
    pub fn num_faces(&self) -> usize {
        match self {
            Self::Curve(c) => c.edges().len(),
            Self::Surface(s) => s.facets().len(),
        }
    }

    /// Axis-aligned bounds of the vertices, `None` without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Curve(c) => c.bounds(),
            Self::Surface(s) => s.bounds(),
        }
    }

    /// Signed area (2D) or signed volume (3D) of the enclosed region.
    #[must_use]
    pub fn measure(&self) -> f64 {
        match self {
            Self::Curve(c) => c.signed_area(),
            Self::Surface(s) => s.signed_volume(),
        }
    }

    /// Returns `true` if the faces form a closed, consistently oriented boundary.
    ///
    /// Containment never requires this; it is a diagnostic for callers.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match self {
            Self::Curve(c) => c.is_closed(),
            Self::Surface(s) => s.is_closed(),
        }
    }
}

impl From<Curve> for Boundary {
    fn from(curve: Curve) -> Self {
        Self::Curve(curve)
    }
}

impl From<Surface> for Boundary {
    fn from(surface: Surface) -> Self {
        Self::Surface(surface)
    }
}

fn points_2d(vertices: ArrayView2<'_, f64>) -> Vec<Point2> {
    vertices
        .rows()
        .into_iter()
        .map(|row| Point2::new(row[0], row[1]))
        .collect()
}

fn points_3d(vertices: ArrayView2<'_, f64>) -> Vec<Point3> {
    vertices
        .rows()
        .into_iter()
        .map(|row| Point3::new(row[0], row[1], row[2]))
        .collect()
}
