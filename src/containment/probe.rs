//! Line probing: what a line parallel to axis 0 meets on a boundary.
//!
//! Every containment decision in the crate goes through [`visit_line`]. The
//! per-point tester and the scanline rasterizer evaluate the same crossings
//! and the same on-boundary spans, so they agree bit for bit.

use ndarray::{ArrayView1, ArrayViewMut1};

use crate::geometry::{Boundary, Curve, Surface};
use crate::math::clip::{polygon_box_extent, segment_band_extent};
use crate::math::{Point2, Point3};

/// Something a probe line meets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LineHit {
    /// The ray crosses a face at this axis-0 coordinate.
    Crossing(f64),
    /// Positions in `[lo, hi]` are within epsilon of a face.
    Touch(f64, f64),
}

/// Reports every crossing and on-boundary span of the line whose
/// coordinates on axes `1..dim` are `transverse`.
pub(crate) fn visit_line(boundary: &Boundary, transverse: &[f64], epsilon: f64, mut visit: impl FnMut(LineHit)) {
    match boundary {
        Boundary::Curve(curve) => visit_curve(curve, transverse[0], epsilon, &mut visit),
        Boundary::Surface(surface) => visit_surface(surface, transverse[0], transverse[1], epsilon, &mut visit),
    }
}

fn visit_curve(curve: &Curve, y: f64, epsilon: f64, visit: &mut impl FnMut(LineHit)) {
    for (a, b) in curve.segments() {
        if let Some((lo, hi)) = segment_band_extent(a, b, y, epsilon) {
            visit(LineHit::Touch(lo - epsilon, hi + epsilon));
        }
        if let Some(x) = edge_crossing(a, b, y) {
            visit(LineHit::Crossing(x));
        }
    }
}

fn visit_surface(surface: &Surface, y: f64, z: f64, epsilon: f64, visit: &mut impl FnMut(LineHit)) {
    let vertices = surface.vertices();
    for &tri in surface.triangles() {
        let corners = tri.map(|i| vertices[i]);
        if let Some((lo, hi)) = polygon_box_extent(&corners, y, z, epsilon) {
            visit(LineHit::Touch(lo - epsilon, hi + epsilon));
        }
        if let Some(x) = triangle_crossing(vertices, tri, y, z) {
            visit(LineHit::Crossing(x));
        }
    }
}

/// X-coordinate where edge `a`-`b` crosses the horizontal line `y`.
///
/// Half-open in y: an endpoint lying exactly on the line counts as below it,
/// so a vertex shared by two edges is counted once or not at all.
fn edge_crossing(a: &Point2, b: &Point2, y: f64) -> Option<f64> {
    if (a.y > y) == (b.y > y) {
        return None;
    }
    Some(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y))
}

/// X-coordinate where the line `(y, z)` pierces a triangle.
///
/// The line is shifted by the infinitesimal offset `(δ, δ²)` in `(y, z)`,
/// which never lands on a projected edge or vertex: a line grazing an edge,
/// passing a vertex or lying in the triangle's plane gets a definite answer.
/// Edges are evaluated from their lower vertex index, so a triangle and its
/// neighbour agree on every shared edge regardless of winding or facet order.
#[allow(clippy::float_cmp)]
fn triangle_crossing(vertices: &[Point3], tri: [usize; 3], y: f64, z: f64) -> Option<f64> {
    let mut odd = false;
    for k in 0..3 {
        let (i, j) = (tri[k], tri[(k + 1) % 3]);
        let (a, b) = if i < j {
            (&vertices[i], &vertices[j])
        } else {
            (&vertices[j], &vertices[i])
        };
        if (a.z > z) == (b.z > z) {
            continue;
        }
        // Sign of (crossing y - y) times the edge's z-extent.
        let orient = (b.y - a.y) * (z - a.z) - (b.z - a.z) * (y - a.y);
        if orient != 0.0 && (orient > 0.0) == (b.z > a.z) {
            odd = !odd;
        }
    }
    if !odd {
        return None;
    }

    let [a, b, c] = tri.map(|i| vertices[i]);
    let normal = (b - a).cross(&(c - a));
    if normal.x == 0.0 {
        return None;
    }
    Some(a.x - (normal.y * (y - a.y) + normal.z * (z - a.z)) / normal.x)
}

/// Classifies a single point. On-boundary counts as inside.
pub(crate) fn contains_point(boundary: &Boundary, point: &[f64], epsilon: f64) -> bool {
    let Some((&x, transverse)) = point.split_first() else {
        return false;
    };
    let mut odd = false;
    let mut touched = false;
    visit_line(boundary, transverse, epsilon, |hit| match hit {
        LineHit::Crossing(c) => {
            if c > x {
                odd = !odd;
            }
        }
        LineHit::Touch(lo, hi) => touched |= lo <= x && x <= hi,
    });
    touched || odd
}

/// Classifies a point stored as one lane of a `(..., dim)` batch.
pub(crate) fn contains_lane(boundary: &Boundary, lane: ArrayView1<'_, f64>, epsilon: f64) -> bool {
    let mut coords = [0.0; 3];
    for (dst, &src) in coords.iter_mut().zip(lane.iter()) {
        *dst = src;
    }
    contains_point(boundary, &coords[..lane.len()], epsilon)
}

/// Everything one grid line meets, gathered once and reused for every cell
/// on the line.
#[derive(Debug, Default)]
pub(crate) struct LineProbe {
    crossings: Vec<f64>,
    spans: Vec<(f64, f64)>,
}

impl LineProbe {
    pub(crate) fn new(boundary: &Boundary, transverse: &[f64], epsilon: f64) -> Self {
        let mut probe = Self::default();
        visit_line(boundary, transverse, epsilon, |hit| match hit {
            LineHit::Crossing(c) if !c.is_nan() => probe.crossings.push(c),
            LineHit::Crossing(_) => {}
            LineHit::Touch(lo, hi) => probe.spans.push((lo, hi)),
        });
        probe.crossings.sort_by(f64::total_cmp);
        probe
    }

    /// Fills `lane` cell by cell. Cell `i` sits at `coordinate(i)`, which must
    /// increase with `i`.
    ///
    /// Walking the sorted crossings alongside the cells fills the runs
    /// between the 1st and 2nd crossing, the 3rd and 4th, and so on; spans
    /// then mark on-boundary cells.
    pub(crate) fn fill(&self, mut lane: ArrayViewMut1<'_, bool>, coordinate: impl Fn(usize) -> f64) {
        let n = self.crossings.len();
        let mut passed = 0;
        for (i, cell) in lane.iter_mut().enumerate() {
            let x = coordinate(i);
            while passed < n && self.crossings[passed] <= x {
                passed += 1;
            }
            *cell = (n - passed) % 2 == 1;
        }

        let len = lane.len();
        for &(lo, hi) in &self.spans {
            let start = partition_point(len, |i| coordinate(i) < lo);
            let end = partition_point(len, |i| coordinate(i) <= hi);
            for i in start..end.max(start) {
                lane[i] = true;
            }
        }
    }
}

/// First index in `0..len` for which the monotone predicate `pred` is false.
fn partition_point(len: usize, pred: impl Fn(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
