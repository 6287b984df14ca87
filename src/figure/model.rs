//! Figure object model
//!
//! Read-only description of a 2D line figure: axes with limits, labels,
//! gridlines and line traces, plus an optional legend. Mirrors the parts of
//! a matplotlib `Figure` that the Igor translation reads.
//!
//! Figures can be built in code (`LineTrace::new(..)?.with_color(..)`) or
//! loaded from JSON:
//!
//! ```json
//! {
//!   "axes": [{
//!     "xlabel": "Time (s)", "ylabel": "Amplitude",
//!     "xgrid": {"visible": true}, "ygrid": {"visible": true},
//!     "artists": [
//!       {"type": "line", "x": [0, 1], "y": [1, 2], "fmt": "b--", "marker": "o", "markevery": 10}
//!     ]
//!   }],
//!   "legend": {"labels": ["a"]}
//! }
//! ```

use super::color::Rgba;
use super::fmt::FormatSpec;
use crate::igor::error::{IgorError, Result};
use serde::Deserialize;
use std::path::Path;

/// matplotlib rcParams defaults
const DEFAULT_LINEWIDTH: f64 = 1.5;
const DEFAULT_MARKERSIZE: f64 = 6.0;
const DEFAULT_GRID_LINEWIDTH: f64 = 0.8;
const DEFAULT_GRID_COLOR: Rgba = Rgba::rgb(176.0 / 255.0, 176.0 / 255.0, 176.0 / 255.0);
/// Fraction of the data range added on each side when autoscaling
const AXIS_MARGIN: f64 = 0.05;

/// A figure: ordered axes plus an optional legend
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "FigureSpec")]
pub struct Figure {
    pub axes: Vec<Axis>,
    pub legend: Option<Legend>,
}

/// A single set of axes
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Axis {
    /// Explicit x limits; autoscaled from the data when absent
    pub xlim: Option<(f64, f64)>,
    /// Explicit y limits; autoscaled from the data when absent
    pub ylim: Option<(f64, f64)>,
    pub xlabel: String,
    pub ylabel: String,
    pub artists: Vec<Artist>,
    /// First x gridline, if the axis has any
    pub xgrid: Option<GridLine>,
    /// First y gridline, if the axis has any
    pub ygrid: Option<GridLine>,
}

/// Something drawn on an axis
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Artist {
    Line(LineTrace),
    /// Bars, scatter collections, images, ... (not translated)
    #[serde(other)]
    Unsupported,
}

/// One plotted line: coordinates plus visual styling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "LineTraceSpec")]
pub struct LineTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Rgba,
    pub linewidth: f64,
    /// Line style token (`"-"`, `"dashed"`, ...); None = not declared
    pub linestyle: Option<String>,
    /// Marker glyph token (`"o"`, `"D"`, ...); None = no marker
    pub marker: Option<String>,
    pub markersize: f64,
    /// Draw a marker every `n` points; None or 0 = every point
    pub markevery: Option<u32>,
    pub label: Option<String>,
}

/// Visibility and style of an axis' gridlines
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridLine {
    pub visible: bool,
    pub color: Rgba,
    pub linewidth: f64,
}

/// Where the legend entries come from
#[derive(Debug, Clone, PartialEq)]
pub enum Legend {
    /// Explicit labels, matched by position against the legend traces
    Labels(Vec<String>),
    /// Each trace's own label, like `fig.legend()`
    ///
    /// Unlabeled traces and labels starting with `_` get no entry, and the
    /// remaining entries stay on the trace that declared them.
    FromTraces,
}

impl Figure {
    /// Create a figure from axes, without a legend
    pub fn new(axes: Vec<Axis>) -> Self {
        Figure { axes, legend: None }
    }

    /// Attach a legend with explicit labels
    pub fn with_legend<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.legend = Some(Legend::Labels(
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Attach a legend built from the trace labels, like `fig.legend()`
    pub fn with_auto_legend(mut self) -> Self {
        self.legend = Some(Legend::FromTraces);
        self
    }

    /// Parse a figure from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a figure from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total number of line traces across all axes
    pub fn line_count(&self) -> usize {
        self.axes.iter().map(|axis| axis.lines().count()).sum()
    }
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line(mut self, line: LineTrace) -> Self {
        self.artists.push(Artist::Line(line));
        self
    }

    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.artists.push(artist);
        self
    }

    pub fn with_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    pub fn with_limits(mut self, xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        self.xlim = Some(xlim);
        self.ylim = Some(ylim);
        self
    }

    /// Turn on both gridlines with matplotlib's default styling, like `ax.grid(True)`
    pub fn with_grid(mut self) -> Self {
        self.xgrid = Some(GridLine::default());
        self.ygrid = Some(GridLine::default());
        self
    }

    /// Line traces in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &LineTrace> {
        self.artists.iter().filter_map(|artist| match artist {
            Artist::Line(line) => Some(line),
            Artist::Unsupported => None,
        })
    }

    /// Whether the axis holds at least one line trace
    pub fn has_lines(&self) -> bool {
        self.lines().next().is_some()
    }

    /// X limits: explicit, or the padded data range
    pub fn x_limits(&self) -> (f64, f64) {
        self.xlim
            .unwrap_or_else(|| autoscale(self.lines().flat_map(|line| line.x.iter())))
    }

    /// Y limits: explicit, or the padded data range
    pub fn y_limits(&self) -> (f64, f64) {
        self.ylim
            .unwrap_or_else(|| autoscale(self.lines().flat_map(|line| line.y.iter())))
    }
}

/// Data range widened by `AXIS_MARGIN` on both sides; (0, 1) without finite data
fn autoscale<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return (0.0, 1.0);
    }
    if lo == hi {
        // Degenerate range: matplotlib expands a single value by ±5%
        let pad = if lo == 0.0 { 0.05 } else { lo.abs() * AXIS_MARGIN };
        return (lo - pad, hi + pad);
    }
    let pad = (hi - lo) * AXIS_MARGIN;
    (lo - pad, hi + pad)
}

impl LineTrace {
    /// Create a trace with matplotlib's default styling
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(IgorError::Data(format!(
                "x and y must have the same length, got {} and {}",
                x.len(),
                y.len()
            )));
        }
        Ok(LineTrace {
            x,
            y,
            color: Rgba::parse("C0")?,
            linewidth: DEFAULT_LINEWIDTH,
            linestyle: None,
            marker: None,
            markersize: DEFAULT_MARKERSIZE,
            markevery: None,
            label: None,
        })
    }

    /// Apply a format string such as `"b--"`; only the parts it declares change
    pub fn with_fmt(mut self, fmt: &str) -> Result<Self> {
        let spec = FormatSpec::parse(fmt)?;
        if let Some(color) = spec.color {
            self.color = color;
        }
        if spec.line_style.is_some() {
            self.linestyle = spec.line_style;
        }
        if spec.marker.is_some() {
            self.marker = spec.marker;
        }
        Ok(self)
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_linewidth(mut self, linewidth: f64) -> Self {
        self.linewidth = linewidth;
        self
    }

    pub fn with_linestyle(mut self, linestyle: impl Into<String>) -> Self {
        self.linestyle = declared(linestyle.into());
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = declared(marker.into());
        self
    }

    pub fn with_markersize(mut self, markersize: f64) -> Self {
        self.markersize = markersize;
        self
    }

    pub fn with_markevery(mut self, every: u32) -> Self {
        self.markevery = Some(every);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label shown by an automatic legend; `_`-prefixed labels are hidden
    pub fn legend_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.starts_with('_'))
    }

    /// Sparse marker stride, if markers are not drawn at every point
    pub fn marker_interval(&self) -> Option<u32> {
        self.markevery.filter(|&n| n > 0)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// matplotlib spells "no marker" / "no line" as "None", "none", "" or " "
fn declared(token: String) -> Option<String> {
    match token.as_str() {
        "" | " " | "None" | "none" => None,
        _ => Some(token),
    }
}

impl Default for GridLine {
    fn default() -> Self {
        GridLine {
            visible: true,
            color: DEFAULT_GRID_COLOR,
            linewidth: DEFAULT_GRID_LINEWIDTH,
        }
    }
}

/// Line trace as it appears in figure JSON
#[derive(Debug, Deserialize)]
struct LineTraceSpec {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    fmt: Option<String>,
    #[serde(default)]
    color: Option<Rgba>,
    #[serde(default)]
    linewidth: Option<f64>,
    #[serde(default)]
    linestyle: Option<String>,
    #[serde(default)]
    marker: Option<String>,
    #[serde(default)]
    markersize: Option<f64>,
    #[serde(default)]
    markevery: Option<u32>,
    #[serde(default)]
    label: Option<String>,
}

impl TryFrom<LineTraceSpec> for LineTrace {
    type Error = IgorError;

    fn try_from(spec: LineTraceSpec) -> Result<Self> {
        let mut line = LineTrace::new(spec.x, spec.y)?;
        // Explicit keyword attributes override the format string, as in `ax.plot`
        if let Some(fmt) = spec.fmt.as_deref() {
            line = line.with_fmt(fmt)?;
        }
        if let Some(color) = spec.color {
            line.color = color;
        }
        if let Some(linewidth) = spec.linewidth {
            line.linewidth = linewidth;
        }
        if let Some(linestyle) = spec.linestyle {
            line.linestyle = declared(linestyle);
        }
        if let Some(marker) = spec.marker {
            line.marker = declared(marker);
        }
        if let Some(markersize) = spec.markersize {
            line.markersize = markersize;
        }
        line.markevery = spec.markevery;
        line.label = spec.label;
        Ok(line)
    }
}

/// Legend as it appears in figure JSON; labels default to the trace labels
#[derive(Debug, Default, Deserialize)]
struct LegendSpec {
    #[serde(default)]
    labels: Option<Vec<String>>,
}

/// Figure as it appears in JSON
#[derive(Debug, Deserialize)]
struct FigureSpec {
    #[serde(default)]
    axes: Vec<Axis>,
    #[serde(default)]
    legend: Option<LegendSpec>,
}

impl TryFrom<FigureSpec> for Figure {
    type Error = IgorError;

    fn try_from(spec: FigureSpec) -> Result<Self> {
        let figure = Figure::new(spec.axes);
        Ok(match spec.legend {
            None => figure,
            Some(LegendSpec { labels: None }) => figure.with_auto_legend(),
            Some(LegendSpec {
                labels: Some(labels),
            }) => figure.with_legend(labels),
        })
    }
}
