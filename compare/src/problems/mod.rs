//! Benchmark problems. Each model carries its right-hand side, the canonical
//! initial state, and the closed-form reference solution evaluated pointwise
//! on the same grid the solvers use.

pub mod coupled;
pub mod riccati;
pub mod second_order;

pub use coupled::CoupledLinear;
pub use riccati::Riccati;
pub use second_order::SecondOrder;

/// Absolute tolerance for matching a grid point against a known singular
/// x-value. Grid points are floating point, so exact equality would miss
/// them; this is far below any sensible step size.
pub const SINGULAR_TOL: f64 = 1e-9;

/// True when `x` lies within [`SINGULAR_TOL`] of the singular point `x_s`.
pub fn near_singularity(x: f64, x_s: f64) -> bool {
    (x - x_s).abs() < SINGULAR_TOL
}
