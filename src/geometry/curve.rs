use std::collections::HashMap;

use crate::error::{GeometryError, Result};
use crate::math::{Bounds, Point2, Point3};

/// A closed 2D boundary: vertices joined by directed edges.
#[derive(Debug, Clone)]
pub struct Curve {
    vertices: Vec<Point2>,
    edges: Vec<[usize; 2]>,
}

impl Curve {
    /// Creates a curve from vertices and an explicit edge list.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidFace` if an edge references a vertex
    /// index out of range or joins a vertex to itself.
    pub fn new(vertices: Vec<Point2>, edges: Vec<[usize; 2]>) -> Result<Self> {
        for (face, edge) in edges.iter().enumerate() {
            if let Some(&index) = edge.iter().find(|&&i| i >= vertices.len()) {
                return Err(GeometryError::InvalidFace {
                    face,
                    reason: format!(
                        "vertex index {index} out of range for {} vertices",
                        vertices.len()
                    ),
                }
                .into());
            }
            if edge[0] == edge[1] {
                return Err(GeometryError::InvalidFace {
                    face,
                    reason: format!("edge joins vertex {} to itself", edge[0]),
                }
                .into());
            }
        }
        Ok(Self { vertices, edges })
    }

    /// Creates a curve by joining consecutive vertices and closing the loop
    /// from the last vertex back to the first.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidFace` for a single-vertex loop.
    pub fn closed(vertices: Vec<Point2>) -> Result<Self> {
        let n = vertices.len();
        let edges = (0..n).map(|i| [i, (i + 1) % n]).collect();
        Self::new(vertices, edges)
    }

    /// The vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// The edges as pairs of vertex indices.
    #[must_use]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Iterates over edges as endpoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        self.edges
            .iter()
            .map(|&[a, b]| (&self.vertices[a], &self.vertices[b]))
    }

    /// Signed enclosed area (shoelace formula).
    ///
    /// Positive for counter-clockwise, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.segments()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            * 0.5
    }

    /// Returns `true` if every vertex has as many incoming as outgoing edges.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut balance: HashMap<usize, i64> = HashMap::new();
        for &[a, b] in &self.edges {
            *balance.entry(a).or_default() += 1;
            *balance.entry(b).or_default() -= 1;
        }
        balance.values().all(|&v| v == 0)
    }

    /// Axis-aligned bounds of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|p| Point3::new(p.x, p.y, 0.0)), 2)
    }
}
