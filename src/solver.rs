use ndarray::Array2;

use crate::complex::{c, escaped, C};
use crate::coord::SampleGrid;

/// Solved escape-time grid. Counts are in `[0, max_iterations]`; a cell
/// holding the cap never escaped and is treated as inside the set.
#[derive(Clone, Debug)]
pub struct MbState {
    width: usize,
    height: usize,
    max_iterations: u32,
    i: Array2<u32>,
}

impl MbState {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn i_value(&self, x: usize, y: usize) -> u32 {
        self.i[[y, x]]
    }

    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        self.i_value(x, y) >= self.max_iterations
    }
}

#[derive(Clone, Debug)]
pub struct EscapeTimeSolver {
    max_iterations: u32,
}

impl Default for EscapeTimeSolver {
    fn default() -> Self {
        Self::new(500)
    }
}

impl EscapeTimeSolver {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Iterations of z = z^2 + c, starting at z = 0, before the orbit
    /// leaves the escape radius. Returns the cap if it never does.
    pub fn escape_time(&self, point: C<f64>) -> u32 {
        let mut z = c(0.0, 0.0);
        let mut i = 0;
        while !escaped(&z) && i < self.max_iterations {
            z = z * z + point;
            i += 1;
        }
        i
    }

    pub fn solve(&self, grid: &SampleGrid) -> MbState {
        let i = Array2::from_shape_fn((grid.height, grid.width), |(y, x)| {
            self.escape_time(grid.point(x, y))
        });
        MbState {
            width: grid.width,
            height: grid.height,
            max_iterations: self.max_iterations,
            i,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::complex::cr;
    use crate::coord::Viewport;

    #[test]
    fn test_origin_never_escapes() {
        for cap in [1, 10, 500] {
            let solver = EscapeTimeSolver::new(cap);
            assert_eq!(solver.escape_time(c(0.0, 0.0)), cap);
        }
    }

    #[test]
    fn test_threshold_boundary() {
        // c = 2: z1 = 2 with |z1|^2 exactly 4.0, which is not an escape;
        // z2 = 6 is. Two iterations, not one.
        let solver = EscapeTimeSolver::new(100);
        assert_eq!(solver.escape_time(cr(2.0)), 2);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let solver = EscapeTimeSolver::new(100);
        assert_eq!(solver.escape_time(cr(3.0)), 1);
    }

    #[test]
    fn test_period_two_point_is_interior() {
        // c = -1 cycles 0, -1, 0, -1, ...
        let solver = EscapeTimeSolver::new(1000);
        assert_eq!(solver.escape_time(cr(-1.0)), 1000);
    }

    #[test]
    fn test_solve_dimensions() {
        let viewport = Viewport::default().fit_to(12, 7);
        let grid = SampleGrid::new(viewport, 12, 7);
        let state = EscapeTimeSolver::new(50).solve(&grid);
        assert_eq!(state.width(), 12);
        assert_eq!(state.height(), 7);
        assert_eq!(state.max_iterations(), 50);
        // Far left edge (re = -2.5) is outside the set, escapes fast.
        assert!(!state.is_interior(0, 3));
        assert!(state.i_value(0, 3) < 50);
    }

    #[test]
    fn test_solve_empty_grid() {
        let grid = SampleGrid::new(Viewport::default(), 0, 0);
        let state = EscapeTimeSolver::default().solve(&grid);
        assert_eq!(state.width(), 0);
        assert_eq!(state.height(), 0);
    }
}
