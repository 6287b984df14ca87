//! Color specifications and RGBA resolution
//!
//! Resolves the color forms matplotlib accepts for lines and gridlines into
//! normalized RGBA:
//! - single-letter base colors (`b`, `g`, `r`, `c`, `m`, `y`, `k`, `w`)
//! - hex strings (`#RRGGBB`, `#RRGGBBAA`, `#RGB`, `#RGBA`)
//! - property-cycle colors `C0`..`C9` and `tab:` Tableau names
//! - common CSS names (`red`, `orange`, `grey`, ...)
//! - grayscale levels given as a string (`"0.75"`)
//! - RGB/RGBA float arrays

use crate::igor::error::{IgorError, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Tableau 10 colors, also matplotlib's default property cycle
const TABLEAU: [(&str, &str); 10] = [
    ("blue", "#1f77b4"),
    ("orange", "#ff7f0e"),
    ("green", "#2ca02c"),
    ("red", "#d62728"),
    ("purple", "#9467bd"),
    ("brown", "#8c564b"),
    ("pink", "#e377c2"),
    ("gray", "#7f7f7f"),
    ("olive", "#bcbd22"),
    ("cyan", "#17becf"),
];

/// Named CSS colors (lowercase keys for case-insensitive lookup)
static CSS_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("black", "#000000"),
        ("white", "#ffffff"),
        ("red", "#ff0000"),
        ("green", "#008000"),
        ("blue", "#0000ff"),
        ("lime", "#00ff00"),
        ("cyan", "#00ffff"),
        ("aqua", "#00ffff"),
        ("magenta", "#ff00ff"),
        ("fuchsia", "#ff00ff"),
        ("yellow", "#ffff00"),
        ("orange", "#ffa500"),
        ("purple", "#800080"),
        ("brown", "#a52a2a"),
        ("pink", "#ffc0cb"),
        ("olive", "#808000"),
        ("navy", "#000080"),
        ("teal", "#008080"),
        ("maroon", "#800000"),
        ("silver", "#c0c0c0"),
        ("gold", "#ffd700"),
        ("gray", "#808080"),
        ("grey", "#808080"),
        ("lightgray", "#d3d3d3"),
        ("lightgrey", "#d3d3d3"),
        ("darkgray", "#a9a9a9"),
        ("darkgrey", "#a9a9a9"),
        ("darkblue", "#00008b"),
        ("darkred", "#8b0000"),
        ("darkgreen", "#006400"),
        ("darkorange", "#ff8c00"),
        ("lightblue", "#add8e6"),
        ("steelblue", "#4682b4"),
    ])
});

/// A color with normalized channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "ColorSpec")]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    /// Opaque color from RGB channels
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// Build from a 3- or 4-element channel slice
    pub fn from_channels(channels: &[f64]) -> Result<Self> {
        let color = match *channels {
            [r, g, b] => Rgba::rgb(r, g, b),
            [r, g, b, a] => Rgba::new(r, g, b, a),
            _ => {
                return Err(IgorError::Color(format!(
                    "expected 3 or 4 channels, got {}",
                    channels.len()
                )))
            }
        };
        if [color.r, color.g, color.b, color.a]
            .iter()
            .any(|c| !(0.0..=1.0).contains(c))
        {
            return Err(IgorError::Color(format!("{:?} has channels outside [0, 1]", channels)));
        }
        Ok(color)
    }

    /// Resolve a matplotlib color string
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let err = || IgorError::Color(spec.to_string());

        if trimmed.starts_with('#') {
            return parse_hex_color(trimmed).ok_or_else(err);
        }

        if let Some(color) = base_color(trimmed) {
            return Ok(color);
        }

        // Property cycle: C0..C9
        if let Some(idx) = trimmed.strip_prefix('C') {
            if let Ok(idx) = idx.parse::<usize>() {
                let (_, hex) = TABLEAU[idx % TABLEAU.len()];
                return parse_hex_color(hex).ok_or_else(err);
            }
        }

        let lower = trimmed.to_lowercase();
        if let Some(name) = lower.strip_prefix("tab:") {
            let name = if name == "grey" { "gray" } else { name };
            return TABLEAU
                .iter()
                .find(|(n, _)| *n == name)
                .and_then(|(_, hex)| parse_hex_color(hex))
                .ok_or_else(err);
        }

        if let Some(hex) = CSS_COLORS.get(lower.as_str()) {
            return parse_hex_color(hex).ok_or_else(err);
        }

        // Grayscale level
        if let Ok(level) = trimmed.parse::<f64>() {
            if (0.0..=1.0).contains(&level) {
                return Ok(Rgba::rgb(level, level, level));
            }
        }

        Err(err())
    }
}

impl FromStr for Rgba {
    type Err = IgorError;

    fn from_str(s: &str) -> Result<Self> {
        Rgba::parse(s)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

/// Color as it appears in figure JSON: a string or a channel array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Name(String),
    Channels(Vec<f64>),
}

impl TryFrom<ColorSpec> for Rgba {
    type Error = IgorError;

    fn try_from(spec: ColorSpec) -> Result<Self> {
        match spec {
            ColorSpec::Name(name) => Rgba::parse(&name),
            ColorSpec::Channels(channels) => Rgba::from_channels(&channels),
        }
    }
}

/// matplotlib's single-letter base colors
pub(crate) fn base_color(letter: &str) -> Option<Rgba> {
    let color = match letter {
        "b" => Rgba::rgb(0.0, 0.0, 1.0),
        "g" => Rgba::rgb(0.0, 0.5, 0.0),
        "r" => Rgba::rgb(1.0, 0.0, 0.0),
        "c" => Rgba::rgb(0.0, 0.75, 0.75),
        "m" => Rgba::rgb(0.75, 0.0, 0.75),
        "y" => Rgba::rgb(0.75, 0.75, 0.0),
        "k" => Rgba::BLACK,
        "w" => Rgba::WHITE,
        _ => return None,
    };
    Some(color)
}

/// Parse a hex color string to RGBA
///
/// Supports formats:
/// - `#RRGGBB` and `#RRGGBBAA`
/// - `#RGB` and `#RGBA` (each digit doubled)
fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let hex = hex.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| -> Option<f64> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .ok()
            .map(|v| v as f64 / 255.0)
    };

    let a = if expanded.len() == 8 { channel(6)? } else { 1.0 };
    Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Rgba::rgb(1.0, 0.0, 0.0)));
        assert_eq!(parse_hex_color("#00ff00"), Some(Rgba::rgb(0.0, 1.0, 0.0)));
        assert_eq!(parse_hex_color("#00F"), Some(Rgba::rgb(0.0, 0.0, 1.0)));
        assert_eq!(
            parse_hex_color("#FFFFFF00"),
            Some(Rgba::new(1.0, 1.0, 1.0, 0.0))
        );

        // Invalid
        assert_eq!(parse_hex_color("FF0000"), None); // Missing #
        assert_eq!(parse_hex_color("#FFFFF"), None); // Wrong length
        assert_eq!(parse_hex_color("#GGGGGG"), None); // Invalid hex
    }

    #[test]
    fn test_base_colors() {
        assert_eq!(Rgba::parse("r").unwrap(), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(Rgba::parse("g").unwrap(), Rgba::rgb(0.0, 0.5, 0.0));
        assert_eq!(Rgba::parse("b").unwrap(), Rgba::rgb(0.0, 0.0, 1.0));
        assert_eq!(Rgba::parse("k").unwrap(), Rgba::BLACK);
        assert_eq!(Rgba::parse("w").unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_cycle_and_tableau_colors_agree() {
        assert_eq!(Rgba::parse("C0").unwrap(), Rgba::parse("tab:blue").unwrap());
        assert_eq!(Rgba::parse("C3").unwrap(), Rgba::parse("tab:red").unwrap());
        assert_eq!(Rgba::parse("tab:grey").unwrap(), Rgba::parse("tab:gray").unwrap());
        assert!(Rgba::parse("tab:chartreuse").is_err());
    }

    #[test]
    fn test_css_names_case_insensitive() {
        assert_eq!(Rgba::parse("Red").unwrap(), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(Rgba::parse("GREY").unwrap(), Rgba::parse("gray").unwrap());
    }

    #[test]
    fn test_grayscale_level() {
        assert_eq!(Rgba::parse("0.5").unwrap(), Rgba::rgb(0.5, 0.5, 0.5));
        assert!(Rgba::parse("1.5").is_err());
    }

    #[test]
    fn test_unknown_color() {
        let err = Rgba::parse("not-a-color").unwrap_err();
        assert!(matches!(err, IgorError::Color(ref s) if s == "not-a-color"));
    }

    #[test]
    fn test_from_channels() {
        assert_eq!(
            Rgba::from_channels(&[0.1, 0.2, 0.3]).unwrap(),
            Rgba::rgb(0.1, 0.2, 0.3)
        );
        assert_eq!(
            Rgba::from_channels(&[0.1, 0.2, 0.3, 0.5]).unwrap().a,
            0.5
        );
        assert!(Rgba::from_channels(&[0.1, 0.2]).is_err());
        assert!(Rgba::from_channels(&[0.1, 2.0, 0.3]).is_err());
    }

    #[test]
    fn test_deserialize_string_and_array() {
        let named: Rgba = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(named, Rgba::rgb(0.0, 0.0, 1.0));

        let channels: Rgba = serde_json::from_str("[1.0, 0.5, 0.0, 1.0]").unwrap();
        assert_eq!(channels, Rgba::rgb(1.0, 0.5, 0.0));

        assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
    }
}
