//! Converter configuration
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) reproduces the stock translation. Enum-valued options are parsed
//! leniently: unknown strings fall back to the default with a warning.

use crate::igor::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Which traces the figure legend is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum LegendScope {
    /// Only the traces of the last axis that had lines
    #[default]
    LastAxis,
    /// Every translated trace, in figure order
    AllAxes,
}

impl LegendScope {
    /// Parse from string value
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "last_axis" => Self::LastAxis,
            "all_axes" => Self::AllAxes,
            other => {
                tracing::warn!(value = other, "unknown legend_scope, using last_axis");
                Self::LastAxis
            }
        }
    }
}

impl From<String> for LegendScope {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Where the y gridline color comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum GridColorSource {
    /// Each gridline uses its own color
    #[default]
    Own,
    /// The y grid reuses the x gridline color (legacy converter output)
    XForBoth,
}

impl GridColorSource {
    /// Parse from string value
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "own" => Self::Own,
            "x_for_both" => Self::XForBoth,
            other => {
                tracing::warn!(value = other, "unknown grid_color, using own");
                Self::Own
            }
        }
    }
}

impl From<String> for GridColorSource {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Prefix of x data waves (`<prefix>_<index>`)
    pub x_wave_prefix: String,

    /// Prefix of y data waves; y waves also name the traces on the graph
    pub y_wave_prefix: String,

    /// Traces the legend labels are zipped against
    pub legend_scope: LegendScope,

    /// Color used for the y grid
    pub grid_color: GridColorSource,

    /// Igor annotation name of the legend (`Legend/N=<name>`)
    pub legend_name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            x_wave_prefix: "xWave".to_string(),
            y_wave_prefix: "yWave".to_string(),
            legend_scope: LegendScope::default(),
            grid_color: GridColorSource::default(),
            legend_name: "legend".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Parse configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Name of the x wave for trace `index`
    pub fn x_wave_name(&self, index: usize) -> String {
        format!("{}_{}", self.x_wave_prefix, index)
    }

    /// Name of the y wave for trace `index`
    pub fn y_wave_name(&self, index: usize) -> String {
        format!("{}_{}", self.y_wave_prefix, index)
    }
}
