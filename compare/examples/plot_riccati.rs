use compare::{Comparison, problems::Riccati};
use diffeq::UniformGrid;
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = UniformGrid::new(0.0, 1.0, 0.1)?;
    let comparison = Comparison::run(&mut Riccati, &Riccati::Y0, grid, Riccati::exact)?;

    let root = BitMapBackend::new("riccati.png", (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Euler and RK4 vs exact solution", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0_f64..1.0, 0.8_f64..1.6)?;
    chart.configure_mesh().x_desc("x").y_desc("y(x)").draw()?;

    // dense sweep for the reference curve, grid markers for the methods
    chart
        .draw_series(LineSeries::new(
            (0..=200).map(|i| {
                let x = i as f64 / 200.0;
                (x, Riccati::exact(x))
            }),
            &BLACK,
        ))?
        .label("exact")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .draw_series(
            comparison
                .euler
                .iter()
                .map(|(x, y)| Circle::new((x, *y), 4, RED.filled())),
        )?
        .label("Euler")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .draw_series(
            comparison
                .rk4
                .iter()
                .map(|(x, y)| TriangleMarker::new((x, *y), 5, BLUE.filled())),
        )?
        .label("RK4")
        .legend(|(x, y)| TriangleMarker::new((x + 10, y), 5, BLUE.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()?;

    println!("plot written to riccati.png");
    Ok(())
}
