//! State types for the ODE solvers.
//!
//! A state is either a bare `f64` for scalar equations or a [`StateArray`]
//! for systems. Derivatives share the shape of the state they belong to.

use std::{
    fmt::Debug,
    ops::{AddAssign, MulAssign},
};

pub mod state_array;

pub use state_array::StateArray;

/// Trait representing an integrable state for use in ODE solvers.
///
/// Types implementing this trait must support the in-place arithmetic the
/// stepper uses to accumulate stages, and expose their components in a fixed
/// order so reporting can address them without knowing the concrete type.
pub trait OdeState: Clone + Default + Debug + MulAssign<f64>
where
    for<'a> Self: AddAssign<&'a Self>,
{
    /// Components of the state, one `f64` per equation.
    fn components(&self) -> &[f64];

    /// Number of components.
    fn dim(&self) -> usize {
        self.components().len()
    }
}

impl OdeState for f64 {
    fn components(&self) -> &[f64] {
        std::slice::from_ref(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_state_has_one_component() {
        let y = 2.5_f64;
        assert_eq!(y.dim(), 1);
        assert_eq!(y.components(), &[2.5]);
    }

    #[test]
    fn scalar_state_arithmetic_is_in_place() {
        let mut y = 1.0_f64;
        y *= 0.5;
        y += &2.0;
        assert_eq!(y, 2.5);
    }
}
