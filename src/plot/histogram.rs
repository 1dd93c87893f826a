// ABOUTME: Renders a density histogram with a Gaussian KDE overlay to PNG.
// ABOUTME: Output file is {column}_histogram.png, overwriting any existing file.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::PlotError;

/// Default bin count when the caller does not specify one.
pub const DEFAULT_BINS: usize = 10;

/// File name for a column's histogram. Characters that could escape the
/// output directory are replaced before the name is used as a path.
pub fn histogram_filename(column: &str) -> String {
    let safe: String = column
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_histogram.png")
}

/// Render a density-normalized histogram of `values` with an overlaid
/// kernel-density curve. Returns the path of the written PNG.
pub fn render_histogram(
    values: &[f64],
    column: &str,
    bins: usize,
    out_dir: &Path,
) -> Result<PathBuf, PlotError> {
    if values.is_empty() {
        return Err(PlotError::Empty(column.to_string()));
    }

    let bins = bins.max(1);
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return Err(PlotError::Empty(column.to_string()));
    }
    // A constant column still gets a visible bar.
    if hi - lo < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let n = values.len() as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let densities: Vec<f64> = counts.iter().map(|&c| c as f64 / (n * width)).collect();

    let curve = kde_curve(values, lo, hi);
    let mut y_max = densities.iter().copied().fold(0.0f64, f64::max);
    for &(_, y) in &curve {
        y_max = y_max.max(y);
    }
    let y_max = (y_max * 1.1).max(1e-6);

    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(histogram_filename(column));

    let root = BitMapBackend::new(&out_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    // No text elements; drawing text needs a font the host may not have.
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(lo..hi, 0f64..y_max)
        .map_err(render_err)?;

    chart.configure_mesh().draw().map_err(render_err)?;

    chart
        .draw_series(densities.iter().enumerate().map(|(i, &d)| {
            let x0 = lo + i as f64 * width;
            Rectangle::new([(x0, 0.0), (x0 + width, d)], BLUE.mix(0.4).filled())
        }))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(curve, RED.stroke_width(2)))
        .map_err(render_err)?;

    drop(chart);
    root.present().map_err(render_err)?;
    drop(root);

    Ok(out_path)
}

fn render_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}

/// Gaussian kernel density estimate on a fixed grid over [lo, hi],
/// with Silverman's rule-of-thumb bandwidth.
fn kde_curve(values: &[f64], lo: f64, hi: f64) -> Vec<(f64, f64)> {
    const GRID: usize = 200;

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let mut h = 1.06 * var.sqrt() * n.powf(-0.2);
    if h <= 0.0 || !h.is_finite() {
        h = 1.0;
    }

    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * n * h);
    (0..=GRID)
        .map(|i| {
            let x = lo + (hi - lo) * i as f64 / GRID as f64;
            let y = values
                .iter()
                .map(|v| (-((x - v) / h).powi(2) / 2.0).exp())
                .sum::<f64>()
                * norm;
            (x, y)
        })
        .collect()
}
