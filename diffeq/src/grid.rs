use thiserror::Error;

/// Relative slack allowed when checking that `h` evenly divides the interval.
/// `(x_end - x0) / h` often misses an integer by a few ulps even for clean
/// inputs like `h = 0.1`.
const DIVISIBILITY_TOL: f64 = 1e-9;

/// Errors raised while validating grid parameters. All of these are fatal
/// before any integration starts.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("step size must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("integration interval is empty: x_end = {x_end} must exceed x0 = {x0}")]
    EmptyInterval { x0: f64, x_end: f64 },
    #[error("step size {h} does not evenly divide the interval [{x0}, {x_end}]")]
    UnevenStep { x0: f64, x_end: f64, h: f64 },
}

/// Uniform grid from `x0` to `x_end` inclusive with spacing `h`.
///
/// The grid has `round((x_end - x0) / h) + 1` points; `h` must evenly divide
/// the interval (within [`DIVISIBILITY_TOL`]) so the final point lands on
/// `x_end` rather than short of or past it.
#[derive(Debug, Clone, Copy)]
pub struct UniformGrid {
    x0: f64,
    x_end: f64,
    h: f64,
    n: usize,
}

impl UniformGrid {
    pub fn new(x0: f64, x_end: f64, h: f64) -> Result<Self, GridError> {
        if !h.is_finite() || h <= 0.0 {
            return Err(GridError::InvalidStep(h));
        }
        if x_end <= x0 {
            return Err(GridError::EmptyInterval { x0, x_end });
        }
        let steps = (x_end - x0) / h;
        let rounded = steps.round();
        if (steps - rounded).abs() > DIVISIBILITY_TOL * rounded {
            return Err(GridError::UnevenStep { x0, x_end, h });
        }
        Ok(Self {
            x0,
            x_end,
            h,
            n: rounded as usize + 1,
        })
    }

    /// Number of grid points, counting both endpoints.
    pub fn len(&self) -> usize {
        self.n
    }

    /// A valid grid always has at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step size.
    pub fn step(&self) -> f64 {
        self.h
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// The `i`-th grid point. The final point is exactly `x_end` so every
    /// consumer sees the same endpoint.
    pub fn point(&self, i: usize) -> f64 {
        if i + 1 == self.n {
            self.x_end
        } else {
            self.x0 + i as f64 * self.h
        }
    }

    /// Iterator over all grid points in order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(|i| self.point(i))
    }
}
