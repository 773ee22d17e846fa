use std::error::Error;

use diffeq::{OdeModel, StateArray};

/// Second-order problem `y'' + 3y' + 2y = 1 / (eˣ + 1)` reduced to a
/// first-order system with `y1 = y`, `y2 = y'`:
///
/// `y1' = y2`
/// `y2' = -2y1 - 3y2 + 1 / (eˣ + 1)`
///
/// The reference solution is `y(x) = (e^{-x} + e^{-2x})(ln(eˣ + 1) + 1)`;
/// the initial state is taken from it so the comparison tracks a genuine
/// solution curve.
#[derive(Debug)]
pub struct SecondOrder;

impl SecondOrder {
    /// Initial state consistent with the reference solution:
    /// `y(0) = 2(ln 2 + 1)`, `y'(0) = -3 ln 2 - 2`.
    pub fn y0() -> StateArray<2> {
        let ln2 = std::f64::consts::LN_2;
        StateArray::new([2.0 * (ln2 + 1.0), -3.0 * ln2 - 2.0])
    }

    /// Reference solution `y(x)`.
    pub fn exact(x: f64) -> f64 {
        ((-x).exp() + (-2.0 * x).exp()) * ((x.exp() + 1.0).ln() + 1.0)
    }

    /// Derivative `y'(x)` of the reference solution.
    pub fn exact_derivative(x: f64) -> f64 {
        let u = (x.exp() + 1.0).ln() + 1.0;
        -((-x).exp() + 2.0 * (-2.0 * x).exp()) * u
            + ((-x).exp() + (-2.0 * x).exp()) * x.exp() / (x.exp() + 1.0)
    }

    /// Reference solution in state form `(y, y')`.
    pub fn exact_state(x: f64) -> StateArray<2> {
        StateArray::new([Self::exact(x), Self::exact_derivative(x)])
    }
}

impl OdeModel for SecondOrder {
    type State = StateArray<2>;

    fn f(
        &mut self,
        x: f64,
        y: &StateArray<2>,
        dydx: &mut StateArray<2>,
    ) -> Result<(), Box<dyn Error>> {
        dydx[0] = y[1];
        dydx[1] = -2.0 * y[0] - 3.0 * y[1] + 1.0 / (x.exp() + 1.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use diffeq::{Solver, UniformGrid};

    #[test]
    fn initial_state_lies_on_the_reference_solution() {
        let y0 = SecondOrder::y0();
        let exact = SecondOrder::exact_state(0.0);
        assert_abs_diff_eq!(y0[0], exact[0], epsilon = 1e-12);
        assert_abs_diff_eq!(y0[1], exact[1], epsilon = 1e-12);
    }

    #[test]
    fn reference_solution_satisfies_the_ode() {
        // finite-difference check of y'' + 3y' + 2y = 1/(e^x + 1)
        let dx = 1e-6;
        for i in 0..=10 {
            let x = i as f64 * 0.1;
            let ypp =
                (SecondOrder::exact_derivative(x + dx) - SecondOrder::exact_derivative(x - dx))
                    / (2.0 * dx);
            let residual =
                ypp + 3.0 * SecondOrder::exact_derivative(x) + 2.0 * SecondOrder::exact(x)
                    - 1.0 / (x.exp() + 1.0);
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn rk4_matches_the_linear_reference_within_1e4() {
        let grid = UniformGrid::new(0.0, 1.0, 0.1).unwrap();
        let trajectory = Solver::Rk4
            .solve_fixed(&mut SecondOrder, &SecondOrder::y0(), &grid)
            .unwrap();
        for (x, y) in trajectory.iter() {
            let exact = SecondOrder::exact_state(x);
            assert_abs_diff_eq!(y[0], exact[0], epsilon = 1e-4);
            assert_abs_diff_eq!(y[1], exact[1], epsilon = 1e-4);
        }
    }

    #[test]
    fn euler_stays_within_first_order_accuracy() {
        let grid = UniformGrid::new(0.0, 1.0, 0.1).unwrap();
        let trajectory = Solver::Euler
            .solve_fixed(&mut SecondOrder, &SecondOrder::y0(), &grid)
            .unwrap();
        for (x, y) in trajectory.iter() {
            let exact = SecondOrder::exact_state(x);
            assert_abs_diff_eq!(y[0], exact[0], epsilon = 0.15);
            assert_abs_diff_eq!(y[1], exact[1], epsilon = 0.15);
        }
    }
}
