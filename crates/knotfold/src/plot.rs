//! Scatter plot of base-pair distance against sequence length.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

pub fn plot_distances(path: &Path, points: &[(usize, usize)]) -> Result<()> {
    let max_length = points.iter().map(|p| p.0).max().unwrap_or(0);
    let max_distance = points.iter().map(|p| p.1).max().unwrap_or(0);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Plain vs. knot-preserving prediction", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..max_length + 1, 0..max_distance + 1)?;

    chart
        .configure_mesh()
        .x_desc("Sequence length")
        .y_desc("Base-pair distance")
        .draw()?;

    chart.draw_series(
        points.iter().map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;
    root.present()?;
    log::info!("Wrote plot of {} points to {}.", points.len(), path.display());
    Ok(())
}
