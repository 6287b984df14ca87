//! Figure → Igor translation pipeline
//!
//! The pipeline:
//! 1. Opens a graph window (`Display`)
//! 2. For each axis holding line traces, creates an x/y wave pair per trace
//!    and emits the append, axis, grid and style commands for that trace
//! 3. Emits one legend, from explicit labels or from each trace's own label
//!
//! Commands go to the session in the order Igor has to replay them: a trace
//! is appended before its style is modified, and a later `mode(...)` command
//! overrides an earlier one for the same trace.

use crate::config::{ConverterConfig, GridColorSource, LegendScope};
use crate::figure::{Axis, Figure, Legend, LineTrace};
use crate::igor::commands::{self, igor_rgb, AxisSide};
use crate::igor::error::Result;
use crate::igor::markers::{line_style_code, marker_code};
use crate::igor::session::IgorSession;
use tracing::{debug, info, warn};

/// A trace placed on the graph: its y wave and the trace it came from
#[derive(Clone)]
struct Converted<'a> {
    wave: String,
    line: &'a LineTrace,
}

/// Translate a figure into Igor commands on `session`
///
/// Returns the y-wave names the legend is matched against (the traces of
/// the last axis with lines, unless `config.legend_scope` says otherwise).
/// Axes without line traces are skipped with a warning.
pub fn convert<S: IgorSession>(
    figure: &Figure,
    session: &mut S,
    config: &ConverterConfig,
) -> Result<Vec<String>> {
    info!(
        axes = figure.axes.len(),
        traces = figure.line_count(),
        "Converting figure"
    );

    emit(session, commands::display())?;

    // Wave indices run across the whole figure so names never collide
    let mut next_index = 0;
    let mut all_traces: Vec<Converted> = Vec::new();
    let mut last_axis_traces: Vec<Converted> = Vec::new();

    for (axis_idx, axis) in figure.axes.iter().enumerate() {
        if !axis.has_lines() {
            warn!(
                axis = axis_idx,
                artists = axis.artists.len(),
                "Axis type not implemented (no line traces), skipping"
            );
            continue;
        }

        let traces = line_plot(axis, session, config, &mut next_index)?;
        info!(axis = axis_idx, traces = traces.len(), "Axis converted");

        all_traces.extend(traces.iter().cloned());
        last_axis_traces = traces;
    }

    let legend_traces = match config.legend_scope {
        LegendScope::LastAxis => last_axis_traces,
        LegendScope::AllAxes => all_traces,
    };

    if let Some(legend) = &figure.legend {
        legend_entries(legend, &legend_traces, session, config)?;
    }

    Ok(legend_traces.into_iter().map(|t| t.wave).collect())
}

/// Emit the legend for the correlated traces, or warn when it would be empty
fn legend_entries<S: IgorSession>(
    legend: &Legend,
    traces: &[Converted],
    session: &mut S,
    config: &ConverterConfig,
) -> Result<()> {
    let entries: Vec<(&str, &str)> = match legend {
        Legend::Labels(labels) => {
            if labels.len() != traces.len() {
                debug!(
                    labels = labels.len(),
                    traces = traces.len(),
                    "Legend labels and traces differ in count, extra entries dropped"
                );
            }
            traces
                .iter()
                .map(|t| t.wave.as_str())
                .zip(labels.iter().map(String::as_str))
                .collect()
        }
        Legend::FromTraces => traces
            .iter()
            .filter_map(|t| t.line.legend_label().map(|label| (t.wave.as_str(), label)))
            .collect(),
    };

    match commands::legend(&config.legend_name, &entries) {
        Some(command) => emit(session, command)?,
        None if traces.is_empty() => {
            warn!("Figure declares a legend but no traces were converted, skipping legend")
        }
        None => warn!(
            traces = traces.len(),
            "Legend has no labels for the converted traces, skipping legend"
        ),
    }

    Ok(())
}

/// Translate one axis; returns its traces in order
fn line_plot<'a, S: IgorSession>(
    axis: &'a Axis,
    session: &mut S,
    config: &ConverterConfig,
    next_index: &mut usize,
) -> Result<Vec<Converted<'a>>> {
    let x_limits = axis.x_limits();
    let y_limits = axis.y_limits();

    let mut traces = Vec::new();

    for line in axis.lines() {
        let index = *next_index;
        *next_index += 1;

        let x_wave = session.create_wave(&config.x_wave_name(index), &line.x, true)?;
        let y_wave = session.create_wave(&config.y_wave_name(index), &line.y, true)?;
        debug!(index, points = line.len(), "Created waves {} / {}", x_wave, y_wave);

        emit(session, commands::append_to_graph(&y_wave, &x_wave))?;

        // Axis setup is repeated for every trace; later copies reassert the same values
        emit(session, commands::set_axis(AxisSide::Bottom, x_limits))?;
        emit(session, commands::set_axis(AxisSide::Left, y_limits))?;
        emit(session, commands::label(AxisSide::Bottom, &axis.xlabel))?;
        emit(session, commands::label(AxisSide::Left, &axis.ylabel))?;

        grid_lines(axis, session, config)?;
        trace_style(line, &y_wave, session)?;

        traces.push(Converted { wave: y_wave, line });
    }

    Ok(traces)
}

/// Gridline commands for the visible gridlines of an axis
fn grid_lines<S: IgorSession>(
    axis: &Axis,
    session: &mut S,
    config: &ConverterConfig,
) -> Result<()> {
    if let Some(x_grid) = axis.xgrid.filter(|g| g.visible) {
        let rgb = igor_rgb(x_grid.color);
        emit(session, commands::grid(AxisSide::Bottom, x_grid.linewidth, rgb))?;
    }

    if let Some(y_grid) = axis.ygrid.filter(|g| g.visible) {
        let color = match config.grid_color {
            GridColorSource::Own => y_grid.color,
            GridColorSource::XForBoth => axis.xgrid.map_or(y_grid.color, |x| x.color),
        };
        emit(session, commands::grid(AxisSide::Left, y_grid.linewidth, igor_rgb(color)))?;
    }

    Ok(())
}

/// Width, line style, sparse markers, marker shape and color of one trace
fn trace_style<S: IgorSession>(line: &LineTrace, wave: &str, session: &mut S) -> Result<()> {
    emit(session, commands::line_size(wave, line.linewidth))?;

    if let Some(style) = &line.linestyle {
        emit(session, commands::line_style(wave, line_style_code(style)))?;
    }

    // Switches the trace to lines+markers, overriding the mode set above
    if let Some(every) = line.marker_interval() {
        emit(session, commands::sparse_markers(wave, every, line.markersize))?;
    }

    if let Some(marker) = &line.marker {
        emit(session, commands::marker(wave, marker_code(marker)))?;
    }

    emit(session, commands::rgb(wave, igor_rgb(line.color)))
}

fn emit<S: IgorSession>(session: &mut S, command: String) -> Result<()> {
    debug!(command = %command, "Igor command");
    session.execute(&command)
}
