//! Benchmark Cauchy problems with closed-form reference solutions, plus
//! side-by-side reporting for the fixed-step solvers in `diffeq`.

pub mod problems;
pub mod report;

pub use report::Comparison;
