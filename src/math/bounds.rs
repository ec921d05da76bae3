use super::clip::misses_band;
use super::Point3;

/// An axis-aligned bounding box over the vertices of a boundary.
///
/// 2D bounds keep `z = 0` on both corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
    dim: usize,
}

impl Bounds {
    /// Computes the bounds of a set of points, using the first `dim` coordinates.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point3>, dim: usize) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            (
                Point3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        });
        Some(Self { min, max, dim })
    }

    /// Number of meaningful axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns `true` if `point` lies within the box grown by `margin` on every side.
    #[must_use]
    pub fn contains(&self, point: &[f64], margin: f64) -> bool {
        point
            .iter()
            .enumerate()
            .take(self.dim)
            .all(|(axis, &c)| c >= self.min[axis] - margin && c <= self.max[axis] + margin)
    }

    /// Returns `true` if the line parallel to axis 0 at the given transverse
    /// coordinates (axes `1..dim`) passes through the box grown by `margin`.
    ///
    /// Uses the same band test as [`segment_band_extent`] and
    /// [`polygon_box_extent`]: a culled line meets no face.
    ///
    /// [`segment_band_extent`]: super::clip::segment_band_extent
    /// [`polygon_box_extent`]: super::clip::polygon_box_extent
    #[must_use]
    pub fn meets_line(&self, transverse: &[f64], margin: f64) -> bool {
        transverse
            .iter()
            .enumerate()
            .take(self.dim.saturating_sub(1))
            .all(|(k, &c)| !misses_band(self.min[k + 1], self.max[k + 1], c, margin))
    }
}
