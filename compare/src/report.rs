//! Side-by-side reporting for one problem: Euler and RK4 trajectories next
//! to the pointwise closed-form reference on the same grid, rendered as a
//! fixed-width text table or written as CSV.

use std::{error::Error, fs, fs::File, io::BufWriter, path::Path};

use csv::Writer;
use diffeq::{OdeModel, OdeState, Solver, Trajectory, UniformGrid};

/// Euler and RK4 trajectories for one problem with the exact sweep.
pub struct Comparison<State: OdeState> {
    pub grid: UniformGrid,
    pub euler: Trajectory<State>,
    pub rk4: Trajectory<State>,
    pub exact: Vec<State>,
}

impl<State: OdeState> Comparison<State> {
    /// Runs both methods across `grid` and evaluates the reference solution
    /// at every grid point.
    pub fn run<Model>(
        model: &mut Model,
        y0: &State,
        grid: UniformGrid,
        exact: impl Fn(f64) -> State,
    ) -> Result<Self, Box<dyn Error>>
    where
        Model: OdeModel<State = State>,
    {
        let euler = Solver::Euler.solve_fixed(model, y0, &grid)?;
        let rk4 = Solver::Rk4.solve_fixed(model, y0, &grid)?;
        let exact = grid.points().map(exact).collect();
        Ok(Self {
            grid,
            euler,
            rk4,
            exact,
        })
    }

    fn labels(&self) -> Vec<String> {
        let n = self.exact.first().map_or(0, |y| y.dim());
        if n == 1 {
            vec!["y".to_string()]
        } else {
            (1..=n).map(|i| format!("y{i}")).collect()
        }
    }

    /// Renders the comparison as a fixed-width text table.
    ///
    /// Non-finite values are printed as `0.0000`, so a mishandled singularity
    /// shows up as a visibly wrong number instead of a crash.
    pub fn render_table(&self, title: &str) -> String {
        let labels = self.labels();

        let mut header = format!("{:>6}", "x");
        for method in ["Euler", "RK4", "exact"] {
            for label in &labels {
                header.push_str(&format!(" | {:>15}", format!("{label} ({method})")));
            }
        }
        let width = header.len();

        let mut out = String::new();
        out.push_str(&format!("--- {title} ---\n"));
        out.push_str(&"-".repeat(width));
        out.push('\n');
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(width));
        out.push('\n');
        for i in 0..self.grid.len() {
            out.push_str(&format!("{:>6.2}", self.grid.point(i)));
            for y in [&self.euler.y[i], &self.rk4.y[i], &self.exact[i]] {
                for value in y.components() {
                    let shown = if value.is_finite() { *value } else { 0.0 };
                    out.push_str(&format!(" | {shown:>15.4}"));
                }
            }
            out.push('\n');
        }
        out.push_str(&"-".repeat(width));
        out.push('\n');
        out
    }

    /// Writes the rendered table to a text file.
    pub fn write_text(&self, path: impl AsRef<Path>, title: &str) -> Result<(), Box<dyn Error>> {
        fs::write(path, self.render_table(title))?;
        Ok(())
    }

    /// Writes the comparison as CSV with `x, euler_*, rk4_*, exact_*`
    /// columns. Values go out unsubstituted.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let labels = self.labels();
        let mut writer = Writer::from_writer(BufWriter::new(File::create(path)?));

        let mut header = vec!["x".to_string()];
        for method in ["euler", "rk4", "exact"] {
            for label in &labels {
                header.push(format!("{method}_{label}"));
            }
        }
        writer.write_record(&header)?;

        for i in 0..self.grid.len() {
            let mut record = vec![self.grid.point(i).to_string()];
            for y in [&self.euler.y[i], &self.rk4.y[i], &self.exact[i]] {
                for value in y.components() {
                    record.push(value.to_string());
                }
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Largest absolute deviation of `trajectory` from the exact sweep, over all
/// grid points and components.
pub fn max_abs_error<State: OdeState>(trajectory: &Trajectory<State>, exact: &[State]) -> f64 {
    let mut max = 0.0_f64;
    for (y, z) in trajectory.y.iter().zip(exact) {
        for (a, b) in y.components().iter().zip(z.components()) {
            max = max.max((a - b).abs());
        }
    }
    max
}

/// Largest deviation relative to `max(1, |exact|)`, over all grid points and
/// components. Suits problems whose solutions grow by orders of magnitude.
pub fn max_rel_error<State: OdeState>(trajectory: &Trajectory<State>, exact: &[State]) -> f64 {
    let mut max = 0.0_f64;
    for (y, z) in trajectory.y.iter().zip(exact) {
        for (a, b) in y.components().iter().zip(z.components()) {
            max = max.max((a - b).abs() / b.abs().max(1.0));
        }
    }
    max
}
