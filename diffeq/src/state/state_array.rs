use std::ops::{AddAssign, Deref, DerefMut, MulAssign};

use super::OdeState;

/// A fixed-size array wrapper representing a generic state vector with `N` f64 components.
///
/// This type is the concrete state for systems of first-order ODEs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateArray<const N: usize>([f64; N]);

impl<const N: usize> StateArray<N> {
    /// Constructs a new `StateArray` from an array of `f64`.
    pub const fn new(array: [f64; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> Default for StateArray<N> {
    /// Creates a `StateArray` with all elements initialized to zero.
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> From<[f64; N]> for StateArray<N> {
    fn from(array: [f64; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> AddAssign<&Self> for StateArray<N> {
    /// Adds each element from the right-hand side into `self` in-place.
    fn add_assign(&mut self, rhs: &Self) {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<const N: usize> MulAssign<f64> for StateArray<N> {
    /// Multiplies each element of the array in-place by the given scalar.
    fn mul_assign(&mut self, rhs: f64) {
        for i in 0..N {
            self.0[i] *= rhs;
        }
    }
}

impl<const N: usize> Deref for StateArray<N> {
    type Target = [f64; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for StateArray<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> OdeState for StateArray<N> {
    fn components(&self) -> &[f64] {
        &self.0
    }
}
