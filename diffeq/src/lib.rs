use std::{error::Error, fmt::Debug};

/// Submodules for core ODE system components.
pub mod grid;
pub mod result;
pub mod rk;
pub mod state;
pub mod tableau;

pub use grid::{GridError, UniformGrid};
pub use result::Trajectory;
pub use state::{OdeState, StateArray};

use crate::{rk::RungeKutta, tableau::ButcherTableau};

/// Trait for defining a dynamical system model that can be numerically integrated.
///
/// Types implementing this trait must define how to compute the derivative (or RHS function)
/// of the ODE at a given point and state.
pub trait OdeModel: Debug {
    type State: OdeState;
    /// Compute the derivative at `x` and state `y`, storing the result in `dydx`.
    fn f(
        &mut self,
        x: f64,
        y: &Self::State,
        dydx: &mut Self::State,
    ) -> Result<(), Box<dyn Error>>;
}

/// Fixed-step explicit methods supported by the solver.
///
/// Both variants drive the same tableau-parameterized stepper; the variant
/// only selects the tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// Explicit Euler, first order.
    Euler,
    /// Classical fourth-order Runge-Kutta.
    Rk4,
}

impl Solver {
    /// Integrates `model` from `y0` across `grid`, producing one state per
    /// grid point.
    pub fn solve_fixed<Model, State>(
        &self,
        model: &mut Model,
        y0: &State,
        grid: &UniformGrid,
    ) -> Result<Trajectory<State>, Box<dyn Error>>
    where
        Model: OdeModel<State = State>,
        State: OdeState,
    {
        match self {
            Solver::Euler => {
                let mut solver = RungeKutta::new(ButcherTableau::<1>::EULER);
                solver.solve_fixed(model, y0, grid)
            }
            Solver::Rk4 => {
                let mut solver = RungeKutta::new(ButcherTableau::<4>::RK4);
                solver.solve_fixed(model, y0, grid)
            }
        }
    }
}

/// Container for a complete ODE problem: a model plus solver dispatch.
pub struct OdeProblem<Model: OdeModel> {
    model: Model,
}

impl<Model: OdeModel> OdeProblem<Model> {
    /// Creates a new `OdeProblem` owning the given model.
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Solves the problem over `grid` with the chosen method.
    pub fn solve_fixed(
        &mut self,
        y0: &Model::State,
        grid: &UniformGrid,
        solver: Solver,
    ) -> Result<Trajectory<Model::State>, Box<dyn Error>> {
        solver.solve_fixed(&mut self.model, y0, grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// y' = y, exact e^x.
    #[derive(Debug)]
    struct Growth;

    impl OdeModel for Growth {
        type State = f64;

        fn f(&mut self, _x: f64, y: &f64, dydx: &mut f64) -> Result<(), Box<dyn Error>> {
            *dydx = *y;
            Ok(())
        }
    }

    #[test]
    fn problem_runs_both_methods_over_one_grid() {
        let grid = UniformGrid::new(0.0, 1.0, 0.1).unwrap();
        let mut problem = OdeProblem::new(Growth);

        let euler = problem.solve_fixed(&1.0, &grid, Solver::Euler).unwrap();
        let rk4 = problem.solve_fixed(&1.0, &grid, Solver::Rk4).unwrap();

        assert_eq!(euler.len(), grid.len());
        assert_eq!(rk4.len(), grid.len());
        // Euler underestimates e; RK4 is close to it
        assert_abs_diff_eq!(euler.y[10], 1.1_f64.powi(10), epsilon = 1e-12);
        assert_abs_diff_eq!(rk4.y[10], std::f64::consts::E, epsilon = 1e-5);
    }

    #[test]
    fn problem_dispatch_matches_direct_solver_calls() {
        let grid = UniformGrid::new(0.0, 0.5, 0.1).unwrap();
        let mut problem = OdeProblem::new(Growth);
        let via_problem = problem.solve_fixed(&1.0, &grid, Solver::Rk4).unwrap();
        let direct = Solver::Rk4.solve_fixed(&mut Growth, &1.0, &grid).unwrap();
        for i in 0..grid.len() {
            assert_eq!(via_problem.y[i].to_bits(), direct.y[i].to_bits());
        }
    }
}
