use std::{error::Error, fs, path::Path};

use compare::{
    Comparison,
    problems::{CoupledLinear, Riccati, SecondOrder},
    report::{max_abs_error, max_rel_error},
};
use diffeq::{OdeState, UniformGrid};

fn report<State: OdeState>(
    comparison: &Comparison<State>,
    title: &str,
    name: &str,
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    print!("{}", comparison.render_table(title));
    println!(
        "max |error| vs exact: Euler {:.4e}, RK4 {:.4e}",
        max_abs_error(&comparison.euler, &comparison.exact),
        max_abs_error(&comparison.rk4, &comparison.exact),
    );
    println!(
        "max relative error:   Euler {:.4e}, RK4 {:.4e}\n",
        max_rel_error(&comparison.euler, &comparison.exact),
        max_rel_error(&comparison.rk4, &comparison.exact),
    );

    comparison.write_text(out_dir.join(format!("{name}.txt")), title)?;
    comparison.write_csv(out_dir.join(format!("{name}.csv")))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("results");
    fs::create_dir_all(out_dir)?;

    // canonical run for all three problems: x in [0, 1], h = 0.1
    let grid = UniformGrid::new(0.0, 1.0, 0.1)?;

    let riccati = Comparison::run(&mut Riccati, &Riccati::Y0, grid, Riccati::exact)?;
    report(
        &riccati,
        "x(2x-1)y' + y^2 - (4x+1)y + 4x = 0,  y(0) = 1",
        "riccati",
        out_dir,
    )?;

    let coupled = Comparison::run(
        &mut CoupledLinear,
        &CoupledLinear::Y0,
        grid,
        CoupledLinear::exact,
    )?;
    report(
        &coupled,
        "y1' = 5y1 - 3y2 + 2e^3x,  y2' = y1 + y2 + 5e^-x",
        "coupled",
        out_dir,
    )?;

    let second = Comparison::run(
        &mut SecondOrder,
        &SecondOrder::y0(),
        grid,
        SecondOrder::exact_state,
    )?;
    report(
        &second,
        "y'' + 3y' + 2y = 1/(e^x + 1)",
        "second_order",
        out_dir,
    )?;

    println!("tables written to {}", out_dir.display());
    Ok(())
}
