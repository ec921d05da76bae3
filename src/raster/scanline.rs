use ndarray::{ArrayD, ArrayViewMut1, Axis, Ix2, Ix3, IxDyn, Zip};

use super::Grid;
use crate::containment::probe::LineProbe;
use crate::geometry::Boundary;

/// Rasterizes `boundary` line by line along axis 0.
///
/// Each grid line gathers its crossings and on-boundary spans once, then
/// fills its cells in a single pass: `O(lines * faces + cells)` instead of
/// `O(cells * faces)`. Lines outside the boundary's extent are left empty.
pub(crate) fn rasterize(boundary: &Boundary, grid: &Grid<'_>, epsilon: f64, parallel: bool) -> ArrayD<bool> {
    let mut mask = ArrayD::from_elem(IxDyn(grid.shape()), false);
    let Some(bounds) = boundary.bounds() else {
        return mask;
    };
    let anchor = grid.anchor();

    let fill_line = |transverse: &[f64], lane: ArrayViewMut1<'_, bool>| {
        if bounds.meets_line(transverse, epsilon) {
            LineProbe::new(boundary, transverse, epsilon).fill(lane, |i| anchor.coordinate(i));
        }
    };

    // Indexed zips need a fixed dimension, so the mask is viewed as 2D or 3D.
    match grid.shape().len() {
        2 => {
            if let Ok(mut plane) = mask.view_mut().into_dimensionality::<Ix2>() {
                let lines = Zip::indexed(plane.lanes_mut(Axis(0)));
                let fill = |j: usize, lane: ArrayViewMut1<'_, bool>| fill_line(&[anchor.coordinate(j)], lane);
                if parallel {
                    lines.par_for_each(fill);
                } else {
                    lines.for_each(fill);
                }
            }
        }
        3 => {
            if let Ok(mut volume) = mask.view_mut().into_dimensionality::<Ix3>() {
                let lines = Zip::indexed(volume.lanes_mut(Axis(0)));
                let fill = |(j, k): (usize, usize), lane: ArrayViewMut1<'_, bool>| {
                    fill_line(&[anchor.coordinate(j), anchor.coordinate(k)], lane);
                };
                if parallel {
                    lines.par_for_each(fill);
                } else {
                    lines.for_each(fill);
                }
            }
        }
        _ => {}
    }
    mask
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::cuboid;
    use crate::raster::CellAnchor;
    use ndarray::array;

    #[test]
    fn triangle_rows() {
        let vertices = array![[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]];
        let boundary = Boundary::from_ordered_loop(vertices.view()).unwrap();
        let grid = Grid::new(&[4, 4], CellAnchor::Center, 2).unwrap();
        let mask = rasterize(&boundary, &grid, 1e-10, false);
        // Cells centered on the hypotenuse are on the boundary and count as inside.
        for ((i, j), &cell) in mask.into_dimensionality::<ndarray::Ix2>().unwrap().indexed_iter() {
            assert_eq!(cell, i + j <= 3, "cell ({i}, {j})");
        }
    }

    #[test]
    fn culled_lines_stay_empty() {
        let vertices = array![[1.0, 1.0], [3.0, 1.0], [3.0, 2.0], [1.0, 2.0]];
        let boundary = Boundary::from_ordered_loop(vertices.view()).unwrap();
        let grid = Grid::new(&[5, 5], CellAnchor::Center, 2).unwrap();
        let mask = rasterize(&boundary, &grid, 1e-10, true);
        assert_eq!(mask.iter().filter(|&&c| c).count(), 2);
        assert!(mask[[1, 1]]);
        assert!(mask[[2, 1]]);
    }

    #[test]
    fn three_d_lines_in_parallel_and_sequence() {
        let cube: Boundary = cuboid(3.0, 2.0, 4.0).into();
        let grid = Grid::new(&[5, 4, 6], CellAnchor::Center, 3).unwrap();
        let sequential = rasterize(&cube, &grid, 1e-10, false);
        assert_eq!(sequential, rasterize(&cube, &grid, 1e-10, true));
        assert_eq!(sequential.shape(), &[5, 4, 6]);
        assert_eq!(sequential.iter().filter(|&&c| c).count(), 3 * 2 * 4);
        assert!(sequential[[2, 1, 3]]);
        assert!(!sequential[[3, 1, 3]]);
    }

    #[test]
    fn empty_boundary() {
        let vertices = ndarray::Array2::<f64>::zeros((0, 2));
        let boundary = Boundary::from_ordered_loop(vertices.view()).unwrap();
        let grid = Grid::new(&[3, 3], CellAnchor::Center, 2).unwrap();
        assert!(rasterize(&boundary, &grid, 1e-10, false).iter().all(|&c| !c));
    }
}
