use crate::complex::{c, C};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    /// Axis of the given length centered on `center`.
    pub fn centered(center: f64, length: f64) -> Self {
        Self::new(center - length / 2.0, center + length / 2.0)
    }
}

/// Rectangular window of the complex plane mapped onto the output grid.
/// `x` is the real axis, `y` the imaginary axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub x: Axis,
    pub y: Axis,
}

impl Viewport {
    pub fn new(x: Axis, y: Axis) -> Self {
        Self { x, y }
    }

    pub fn from_nums(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Self::new(Axis::new(x1, x2), Axis::new(y1, y2))
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.x.length() / self.y.length()
    }

    /// Rescale the imaginary axis so the window's aspect ratio matches a
    /// `width` x `height` grid of square sampling cells. The real axis and
    /// the imaginary midpoint are preserved.
    pub fn fit_to(&self, width: usize, height: usize) -> Self {
        let aspect = height as f64 / width as f64;
        let y = Axis::centered(self.y.center(), self.x.length() * aspect);
        Self::new(self.x, y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_nums(-2.5, 1.0, -1.2, 1.2)
    }
}

/// A viewport sampled at integer grid coordinates. Row 0 is the top of the
/// grid, i.e. the maximum imaginary value.
#[derive(Copy, Clone, Debug)]
pub struct SampleGrid {
    pub viewport: Viewport,
    pub width: usize,
    pub height: usize,
    re_step: f64,
    im_step: f64,
}

fn step(span: f64, dim: usize) -> f64 {
    // A 1-wide (or degenerate 0-wide) axis samples a single line of the
    // window instead of dividing by zero.
    if dim > 1 {
        span / (dim as f64 - 1.0)
    } else {
        0.0
    }
}

impl SampleGrid {
    pub fn new(viewport: Viewport, width: usize, height: usize) -> Self {
        Self {
            viewport,
            width,
            height,
            re_step: step(viewport.x.length(), width),
            im_step: step(viewport.y.length(), height),
        }
    }

    pub fn re_step(&self) -> f64 {
        self.re_step
    }

    pub fn im_step(&self) -> f64 {
        self.im_step
    }

    pub fn point(&self, x: usize, y: usize) -> C<f64> {
        c(
            self.viewport.x.min + x as f64 * self.re_step,
            self.viewport.y.max - y as f64 * self.im_step,
        )
    }
}
