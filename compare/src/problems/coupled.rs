use std::error::Error;

use diffeq::{OdeModel, StateArray};

/// Coupled linear 2x2 system with exponential forcing:
///
/// `y1' = 5y1 - 3y2 + 2e^{3x}`
/// `y2' = y1 + y2 + 5e^{-x}`
///
/// with `y1(0) = -1`, `y2(0) = -2`. No singularities; the right-hand side is
/// the closed-form expression everywhere.
#[derive(Debug)]
pub struct CoupledLinear;

impl CoupledLinear {
    /// Canonical initial state `(y1, y2) = (-1, -2)`.
    pub const Y0: StateArray<2> = StateArray::new([-1.0, -2.0]);

    /// Reference solution:
    ///
    /// `y1 = e^{2x} + 3e^{4x} - e^{-x} - 4e^{3x}`
    /// `y2 = e^{2x} + e^{4x} - 2e^{-x} - 2e^{3x}`
    pub fn exact(x: f64) -> StateArray<2> {
        StateArray::new([
            (2.0 * x).exp() + 3.0 * (4.0 * x).exp() - (-x).exp() - 4.0 * (3.0 * x).exp(),
            (2.0 * x).exp() + (4.0 * x).exp() - 2.0 * (-x).exp() - 2.0 * (3.0 * x).exp(),
        ])
    }
}

impl OdeModel for CoupledLinear {
    type State = StateArray<2>;

    fn f(
        &mut self,
        x: f64,
        y: &StateArray<2>,
        dydx: &mut StateArray<2>,
    ) -> Result<(), Box<dyn Error>> {
        dydx[0] = 5.0 * y[0] - 3.0 * y[1] + 2.0 * (3.0 * x).exp();
        dydx[1] = y[0] + y[1] + 5.0 * (-x).exp();
        Ok(())
    }
}
