use std::{error::Error, fs::File, io::BufWriter, path::Path};

use csv::Writer;

use crate::state::OdeState;

/// Time-ordered solution of one integration run.
///
/// `x` and `y` are parallel vectors: `y[i]` is the state at grid point
/// `x[i]`. The trajectory is append-only; states are never rewritten once
/// pushed.
#[derive(Debug, Clone)]
pub struct Trajectory<State: OdeState> {
    pub x: Vec<f64>,
    pub y: Vec<State>,
}

impl<State: OdeState> Trajectory<State> {
    /// Creates an empty trajectory with room for `n` grid points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    /// Appends the state at grid point `x`.
    pub fn push(&mut self, x: f64, y: &State) {
        self.x.push(x);
        self.y.push(y.clone());
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over `(x, state)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State)> {
        self.x.iter().copied().zip(self.y.iter())
    }

    /// Writes the trajectory as CSV with an `x, y1..yN` header row.
    ///
    /// Non-finite values are written as-is (`NaN`, `inf`); substitution is a
    /// reporting concern, not the trajectory's.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let mut writer = Writer::from_writer(BufWriter::new(File::create(path)?));

        let n = self.y.first().map_or(0, |y| y.dim());
        let mut header = vec!["x".to_string()];
        for i in 0..n {
            header.push(format!("y{}", i + 1));
        }
        writer.write_record(&header)?;

        for (x, y) in self.iter() {
            let mut record = Vec::with_capacity(n + 1);
            record.push(x.to_string());
            for value in y.components() {
                record.push(value.to_string());
            }
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
