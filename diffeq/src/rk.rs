use std::{array, error::Error};

use crate::{
    OdeModel, grid::UniformGrid, result::Trajectory, state::OdeState, tableau::ButcherTableau,
};

// preallocated buffers for intermediate calculations
struct RkBuffers<State: OdeState, const STAGES: usize> {
    /// Stage derivatives.
    k: [State; STAGES],
    /// Scratch state for building staged intermediate points.
    state: State,
    /// Scratch derivative for scaled accumulation.
    derivative: State,
}

impl<State: OdeState, const STAGES: usize> Default for RkBuffers<State, STAGES> {
    fn default() -> Self {
        Self {
            k: array::from_fn(|_| State::default()),
            state: State::default(),
            derivative: State::default(),
        }
    }
}

/// Generic explicit Runge-Kutta stepper driven by a [`ButcherTableau`].
///
/// The same stepper implements every supported method; Euler is the one-stage
/// tableau and the classical RK4 the four-stage one. Buffers are allocated
/// once per solver instance, so stepping allocates nothing.
pub struct RungeKutta<State: OdeState, const STAGES: usize> {
    y: State,
    y_next: State,
    tableau: ButcherTableau<STAGES>,
    buffers: RkBuffers<State, STAGES>,
}

impl<State: OdeState, const STAGES: usize> RungeKutta<State, STAGES> {
    pub fn new(tableau: ButcherTableau<STAGES>) -> Self {
        Self {
            y: State::default(),
            y_next: State::default(),
            tableau,
            buffers: RkBuffers::default(),
        }
    }

    /// Integrates `model` across `grid` starting from `y0`.
    ///
    /// The trajectory has exactly one state per grid point and starts with
    /// `y0` itself. Each step advances from the previous state only, using
    /// the spacing between consecutive grid points; the loop never branches
    /// on which method the tableau encodes. Non-finite derivatives are not
    /// intercepted here and propagate into the remaining trajectory.
    pub fn solve_fixed<Model: OdeModel<State = State>>(
        &mut self,
        model: &mut Model,
        y0: &State,
        grid: &UniformGrid,
    ) -> Result<Trajectory<State>, Box<dyn Error>> {
        let mut trajectory = Trajectory::with_capacity(grid.len());
        self.y.clone_from(y0);
        trajectory.push(grid.point(0), &self.y);
        for i in 0..grid.len() - 1 {
            let x = grid.point(i);
            let h = grid.point(i + 1) - x;
            self.step(model, x, h)?;
            self.y.clone_from(&self.y_next);
            trajectory.push(grid.point(i + 1), &self.y);
        }
        Ok(trajectory)
    }

    /// Advances the internal state by one step of size `h` from `x`.
    ///
    /// Every stage derivative is evaluated against the staged state built
    /// from all earlier stages at once, so components of a system never see
    /// partially advanced values of their neighbors.
    pub fn step<Model: OdeModel<State = State>>(
        &mut self,
        model: &mut Model,
        x: f64,
        h: f64,
    ) -> Result<(), Box<dyn Error>> {
        let k = &mut self.buffers.k;

        // k0
        model.f(x, &self.y, &mut k[0])?;

        // k1 - ks
        for s in 1..STAGES {
            // in place calculation of intermediate points
            self.buffers.state *= 0.0;
            // sum previous ks with appropriate scaling from tableau
            for i in 0..s {
                self.buffers.derivative.clone_from(&k[i]);
                self.buffers.derivative *= self.tableau.a[s][i];
                self.buffers.state += &self.buffers.derivative;
            }
            self.buffers.state *= h;
            self.buffers.state += &self.y;

            model.f(x + self.tableau.c[s] * h, &self.buffers.state, &mut k[s])?;
        }

        self.y_next.clone_from(&self.y);
        for s in 0..STAGES {
            self.buffers.derivative.clone_from(&k[s]);
            self.buffers.derivative *= self.tableau.b[s] * h;
            self.y_next += &self.buffers.derivative;
        }

        Ok(())
    }
}
