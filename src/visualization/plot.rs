//! PNG rendering of the finished U(t) series
//!
//! Consumes the trajectory read-only after the solver is done; nothing
//! here feeds back into the run

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::simulation::states::Trajectory;

/// Draw U(t) as a single line chart and write it to `path`
pub fn render_trajectory(traj: &Trajectory, path: &Path) -> Result<(), Box<dyn Error>> {
    let n = traj.len();
    if n < 2 {
        // a single sample has no extent to draw
        return Ok(());
    }

    let t_end = traj.time(n - 1);

    // Vertical range from the data, padded so a flat series keeps height
    let mut u_min = f64::INFINITY;
    let mut u_max = f64::NEG_INFINITY;
    for &u in &traj.u {
        u_min = u_min.min(u);
        u_max = u_max.max(u);
    }
    let pad = ((u_max - u_min) * 0.05).max(1.0e-9);

    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Solution of the integro-differential equation", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_end, (u_min - pad)..(u_max + pad))?;

    chart
        .configure_mesh()
        .x_desc("t")
        .y_desc("U(t)")
        .x_labels(10)
        .draw()?;

    chart
        .draw_series(LineSeries::new(traj.series(), &BLUE))?
        .label("U(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
