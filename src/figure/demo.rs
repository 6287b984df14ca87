//! Demonstration figure
//!
//! Three traces on one axis: sin(x), 0.5·cos(x) and their product, with a
//! grid and a legend. Used by the CLI's `--demo` mode.

use super::model::{Axis, Figure, LineTrace};
use crate::igor::error::Result;

const SAMPLES: usize = 100;

/// Evenly spaced samples over `[start, stop]`, endpoints included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Build the demonstration figure
pub fn sample_figure() -> Result<Figure> {
    let x = linspace(0.0, 10.0, SAMPLES);
    let y1: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let y2: Vec<f64> = x.iter().map(|v| v.cos() * 0.5).collect();
    let y3: Vec<f64> = y1.iter().zip(&y2).map(|(a, b)| a * b).collect();

    let sine = LineTrace::new(x.clone(), y1)?
        .with_fmt("r-")?
        .with_linewidth(2.0)
        .with_label("sin(x)");

    let cosine = LineTrace::new(x.clone(), y2)?
        .with_fmt("b--")?
        .with_marker("o")
        .with_markersize(2.0)
        .with_markevery(10)
        .with_label("0.5*cos(x)");

    let product = LineTrace::new(x, y3)?
        .with_fmt("g-")?
        .with_linewidth(3.0)
        .with_marker("D")
        .with_markersize(4.0)
        .with_markevery(5)
        .with_label("0.5*cos(x) * sin(x)");

    let axis = Axis::new()
        .with_line(sine)
        .with_line(cosine)
        .with_line(product)
        .with_labels("Time (s)", "Amplitude")
        .with_grid();

    Ok(Figure::new(vec![axis]).with_auto_legend())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Legend;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let xs = linspace(0.0, 10.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.0);
        assert!((xs[99] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_figure_shape() {
        let figure = sample_figure().unwrap();
        assert_eq!(figure.axes.len(), 1);
        assert_eq!(figure.line_count(), 3);

        let axis = &figure.axes[0];
        assert!(axis.xgrid.is_some() && axis.ygrid.is_some());
        assert!(axis.lines().all(|line| line.len() == SAMPLES));

        assert_eq!(figure.legend, Some(Legend::FromTraces));
        let labels: Vec<_> = axis.lines().filter_map(LineTrace::legend_label).collect();
        assert_eq!(labels, vec!["sin(x)", "0.5*cos(x)", "0.5*cos(x) * sin(x)"]);
    }
}
