use super::{Point2, Point3};

/// Returns `true` if values spanning `[min, max]` lie entirely outside the
/// band `|v - center| <= half_width`.
///
/// Line culling and span clipping both reject through this test.
#[must_use]
pub fn misses_band(min: f64, max: f64, center: f64, half_width: f64) -> bool {
    max < center - half_width || min > center + half_width
}

/// Clips segment `a`-`b` to the horizontal band `|y - center| <= half_width`
/// and returns the x-extent `(min, max)` of the part that survives.
#[must_use]
pub fn segment_band_extent(a: &Point2, b: &Point2, center: f64, half_width: f64) -> Option<(f64, f64)> {
    if misses_band(a.y.min(b.y), a.y.max(b.y), center, half_width) {
        return None;
    }
    let (lo, hi) = (center - half_width, center + half_width);

    let dy = b.y - a.y;
    #[allow(clippy::float_cmp)]
    let (x0, x1) = if dy == 0.0 {
        (a.x, b.x)
    } else {
        let t0 = (lo - a.y) / dy;
        let t1 = (hi - a.y) / dy;
        let t_min = t0.min(t1).max(0.0);
        let t_max = t0.max(t1).min(1.0);
        let dx = b.x - a.x;
        (a.x + t_min * dx, a.x + t_max * dx)
    };
    Some((x0.min(x1), x0.max(x1)))
}

/// Clips a convex polygon to the box `|y - cy| <= half_width`,
/// `|z - cz| <= half_width` and returns the x-extent of what remains.
#[must_use]
pub fn polygon_box_extent(polygon: &[Point3], cy: f64, cz: f64, half_width: f64) -> Option<(f64, f64)> {
    let misses = |axis: usize, center: f64| {
        let (min, max) = polygon
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p[axis]), hi.max(p[axis])));
        misses_band(min, max, center, half_width)
    };
    if misses(1, cy) || misses(2, cz) {
        return None;
    }

    let mut clipped = polygon.to_vec();
    for (axis, center) in [(1, cy), (2, cz)] {
        clipped = clip_half_space(&clipped, axis, center - half_width, false);
        clipped = clip_half_space(&clipped, axis, center + half_width, true);
        if clipped.is_empty() {
            return None;
        }
    }
    clipped.iter().fold(None, |acc, p| match acc {
        None => Some((p.x, p.x)),
        Some((lo, hi)) => Some((p.x.min(lo), p.x.max(hi))),
    })
}

/// One Sutherland-Hodgman pass: keeps the part of `polygon` with
/// `p[axis] <= bound` (`keep_below`) or `p[axis] >= bound`.
fn clip_half_space(polygon: &[Point3], axis: usize, bound: f64, keep_below: bool) -> Vec<Point3> {
    let inside = |p: &Point3| {
        if keep_below {
            p[axis] <= bound
        } else {
            p[axis] >= bound
        }
    };

    let n = polygon.len();
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..n {
        let cur = &polygon[i];
        let next = &polygon[(i + 1) % n];
        let (cur_in, next_in) = (inside(cur), inside(next));
        if cur_in {
            out.push(*cur);
        }
        if cur_in != next_in {
            let t = (bound - cur[axis]) / (next[axis] - cur[axis]);
            out.push(cur + (next - cur) * t);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn segment_crossing_band() {
        let (lo, hi) = segment_band_extent(&Point2::new(0.0, 0.0), &Point2::new(4.0, 4.0), 2.0, 0.5).unwrap();
        assert_relative_eq!(lo, 1.5);
        assert_relative_eq!(hi, 2.5);
    }

    #[test]
    fn segment_clamped_at_endpoint() {
        let (lo, hi) = segment_band_extent(&Point2::new(1.0, 0.0), &Point2::new(3.0, 2.0), 0.0, 0.5).unwrap();
        assert_relative_eq!(lo, 1.0);
        assert_relative_eq!(hi, 1.5);
    }

    #[test]
    fn horizontal_segment_in_band() {
        let (lo, hi) = segment_band_extent(&Point2::new(3.0, 1.0), &Point2::new(-1.0, 1.0), 1.0, 0.0).unwrap();
        assert_relative_eq!(lo, -1.0);
        assert_relative_eq!(hi, 3.0);
    }

    #[test]
    fn segment_outside_band() {
        assert!(segment_band_extent(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0), 2.0, 0.5).is_none());
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert!(!misses_band(1.0, 2.0, 3.0, 1.0));
        assert!(!misses_band(4.0, 5.0, 3.0, 1.0));
        assert!(misses_band(4.5, 5.0, 3.0, 1.0));
        assert!(misses_band(0.0, 1.5, 3.0, 1.0));
    }

    #[test]
    fn triangle_through_box() {
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 2.0),
        ];
        let (lo, hi) = polygon_box_extent(&tri, 0.5, 0.5, 0.1).unwrap();
        assert!(lo > 0.5 && hi < 1.5, "unexpected extent ({lo}, {hi})");
        assert!(lo <= hi);
    }

    #[test]
    fn triangle_misses_box() {
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
        ];
        assert!(polygon_box_extent(&tri, 3.0, 3.0, 0.1).is_none());
    }
}
