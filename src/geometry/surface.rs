use std::collections::HashMap;

use crate::error::{GeometryError, Result};
use crate::math::{Bounds, Point3};

/// A closed 3D boundary: vertices joined by polygonal facets.
///
/// Facets are fan-triangulated from their first vertex. Under the even-odd
/// rule the fan of a planar polygon covers exactly the polygon's interior, so
/// containment only ever looks at triangles.
#[derive(Debug, Clone)]
pub struct Surface {
    vertices: Vec<Point3>,
    facets: Vec<Vec<usize>>,
    triangles: Vec<[usize; 3]>,
}

impl Surface {
    /// Creates a surface from vertices and polygonal facets.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidFace` if a facet has fewer than three
    /// distinct vertices or references a vertex index out of range.
    pub fn new(vertices: Vec<Point3>, facets: Vec<Vec<usize>>) -> Result<Self> {
        for (face, facet) in facets.iter().enumerate() {
            if let Some(&index) = facet.iter().find(|&&i| i >= vertices.len()) {
                return Err(GeometryError::InvalidFace {
                    face,
                    reason: format!(
                        "vertex index {index} out of range for {} vertices",
                        vertices.len()
                    ),
                }
                .into());
            }
            let mut distinct = facet.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() < 3 {
                return Err(GeometryError::InvalidFace {
                    face,
                    reason: format!(
                        "facet has {} distinct vertices, at least 3 required",
                        distinct.len()
                    ),
                }
                .into());
            }
        }

        let triangles = facets
            .iter()
            .flat_map(|facet| facet.windows(2).skip(1).map(move |w| [facet[0], w[0], w[1]]))
            .collect();

        Ok(Self {
            vertices,
            facets,
            triangles,
        })
    }

    /// The vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The facets as vertex index lists.
    #[must_use]
    pub fn facets(&self) -> &[Vec<usize>] {
        &self.facets
    }

    /// Fan triangulation of all facets.
    #[must_use]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Signed enclosed volume (divergence theorem over the triangles).
    ///
    /// Positive when facets are wound counter-clockwise seen from outside.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                let (a, b, c) = (&self.vertices[a], &self.vertices[b], &self.vertices[c]);
                a.coords.dot(&b.coords.cross(&c.coords))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Returns `true` if every directed facet edge is matched by the same
    /// edge traversed in the opposite direction by another facet.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut balance: HashMap<(usize, usize), i64> = HashMap::new();
        for facet in &self.facets {
            for (i, &a) in facet.iter().enumerate() {
                let b = facet[(i + 1) % facet.len()];
                if a < b {
                    *balance.entry((a, b)).or_default() += 1;
                } else if b < a {
                    *balance.entry((b, a)).or_default() -= 1;
                }
            }
        }
        balance.values().all(|&v| v == 0)
    }

    /// Axis-aligned bounds of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().copied(), 3)
    }
}
