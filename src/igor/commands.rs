//! Igor Pro command text
//!
//! Each function renders one command line for the Igor command interpreter.
//! Commands are not validated against Igor's grammar.

use crate::figure::Rgba;
use std::fmt;

/// Full scale of an Igor color channel
pub const IGOR_CHANNEL_MAX: f64 = 65535.0;

/// Igor gridStyle for dotted gridlines
const GRID_STYLE_DOTTED: i32 = 3;

/// Igor drawing modes for `ModifyGraph mode(...)`
const MODE_LINES: i32 = 0;
const MODE_LINES_AND_MARKERS: i32 = 4;

/// Graph axis an attribute applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

impl fmt::Display for AxisSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSide::Bottom => f.write_str("bottom"),
            AxisSide::Left => f.write_str("left"),
        }
    }
}

/// Scale normalized RGBA to Igor's 16-bit channels (alpha dropped)
pub fn igor_rgb(color: Rgba) -> [u16; 3] {
    let scale = |c: f64| (c.clamp(0.0, 1.0) * IGOR_CHANNEL_MAX).round() as u16;
    [scale(color.r), scale(color.g), scale(color.b)]
}

/// Escape text for use inside an Igor string literal
///
/// Line breaks become Igor's `\r` escape; a command must fit on one line.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", "\\r")
        .replace(['\n', '\r'], "\\r")
}

pub fn display() -> String {
    "Display".to_string()
}

pub fn append_to_graph(y_wave: &str, x_wave: &str) -> String {
    format!("AppendToGraph {} vs {}", y_wave, x_wave)
}

pub fn set_axis(side: AxisSide, (min, max): (f64, f64)) -> String {
    format!("SetAxis {} {}, {}", side, min, max)
}

pub fn label(side: AxisSide, text: &str) -> String {
    format!("Label {} \"{}\"", side, escape(text))
}

pub fn grid(side: AxisSide, thickness: f64, rgb: [u16; 3]) -> String {
    format!(
        "ModifyGraph grid({s})=1, gridHair({s})={}, gridStyle({s})={}, gridRGB({s})=({},{},{})",
        thickness,
        GRID_STYLE_DOTTED,
        rgb[0],
        rgb[1],
        rgb[2],
        s = side
    )
}

pub fn line_size(wave: &str, width: f64) -> String {
    format!("ModifyGraph lsize({})={}", wave, width)
}

pub fn line_style(wave: &str, code: i32) -> String {
    format!(
        "ModifyGraph mode({w})={}, lstyle({w})={}",
        MODE_LINES,
        code,
        w = wave
    )
}

pub fn sparse_markers(wave: &str, every: u32, size: f64) -> String {
    format!(
        "ModifyGraph mode({w})={}, mskip({w})={}, mSize({w})={}",
        MODE_LINES_AND_MARKERS,
        every,
        size,
        w = wave
    )
}

pub fn marker(wave: &str, code: i32) -> String {
    format!("ModifyGraph marker({})={}", wave, code)
}

pub fn rgb(wave: &str, rgb: [u16; 3]) -> String {
    format!("ModifyGraph rgb({})=({},{},{})", wave, rgb[0], rgb[1], rgb[2])
}

/// Legend referencing each wave's trace symbol followed by its label
///
/// Entries are separated by Igor's `\r` escape and the last entry closes the
/// quoted string. Returns None when there are no entries.
pub fn legend(name: &str, entries: &[(&str, &str)]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let body = entries
        .iter()
        .map(|(wave, text)| format!("\\s({}) {}", wave, escape(text)))
        .collect::<Vec<_>>()
        .join("\\r");
    Some(format!("Legend/C/N={}/J \"{}\"", name, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_igor_rgb_boundaries() {
        assert_eq!(igor_rgb(Rgba::BLACK), [0, 0, 0]);
        assert_eq!(igor_rgb(Rgba::WHITE), [65535, 65535, 65535]);
        assert_eq!(igor_rgb(Rgba::rgb(1.0, 0.0, 0.0)), [65535, 0, 0]);
    }

    #[test]
    fn test_igor_rgb_linear() {
        // 0.5 * 65535 = 32767.5 rounds up
        assert_eq!(igor_rgb(Rgba::rgb(0.5, 0.25, 0.0)), [32768, 16384, 0]);
        // Alpha does not affect the channels
        assert_eq!(igor_rgb(Rgba::new(1.0, 1.0, 1.0, 0.0)), [65535, 65535, 65535]);
    }

    #[test]
    fn test_axis_commands() {
        assert_eq!(set_axis(AxisSide::Bottom, (-0.5, 10.5)), "SetAxis bottom -0.5, 10.5");
        assert_eq!(set_axis(AxisSide::Left, (0.0, 1.0)), "SetAxis left 0, 1");
        assert_eq!(label(AxisSide::Bottom, "Time (s)"), "Label bottom \"Time (s)\"");
    }

    #[test]
    fn test_label_escapes_quotes() {
        assert_eq!(
            label(AxisSide::Left, "say \"hi\""),
            "Label left \"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_grid_command() {
        assert_eq!(
            grid(AxisSide::Left, 0.8, [1, 2, 3]),
            "ModifyGraph grid(left)=1, gridHair(left)=0.8, gridStyle(left)=3, gridRGB(left)=(1,2,3)"
        );
    }

    #[test]
    fn test_escape_line_breaks() {
        assert_eq!(escape("Time\n(s)"), r"Time\r(s)");
        assert_eq!(escape("a\r\nb\rc"), r"a\rb\rc");
        assert_eq!(escape("C:\\data\n"), r"C:\\data\r");
        assert_eq!(label(AxisSide::Bottom, "two\nlines"), r#"Label bottom "two\rlines""#);
    }

    #[test]
    fn test_trace_style_commands() {
        assert_eq!(line_size("yWave_0", 2.0), "ModifyGraph lsize(yWave_0)=2");
        assert_eq!(
            line_style("yWave_1", 3),
            "ModifyGraph mode(yWave_1)=0, lstyle(yWave_1)=3"
        );
        assert_eq!(
            sparse_markers("yWave_1", 10, 2.0),
            "ModifyGraph mode(yWave_1)=4, mskip(yWave_1)=10, mSize(yWave_1)=2"
        );
        assert_eq!(marker("yWave_2", 18), "ModifyGraph marker(yWave_2)=18");
        assert_eq!(
            rgb("yWave_0", [65535, 0, 0]),
            "ModifyGraph rgb(yWave_0)=(65535,0,0)"
        );
    }

    #[test]
    fn test_legend_two_entries() {
        let cmd = legend("legend", &[("yWave_0", "A"), ("yWave_1", "B")]).unwrap();
        assert_eq!(cmd, r#"Legend/C/N=legend/J "\s(yWave_0) A\r\s(yWave_1) B""#);
    }

    #[test]
    fn test_legend_single_entry_closes_quote() {
        let cmd = legend("legend", &[("yWave_0", "only")]).unwrap();
        assert_eq!(cmd, r#"Legend/C/N=legend/J "\s(yWave_0) only""#);
    }

    #[test]
    fn test_legend_empty() {
        assert_eq!(legend("legend", &[]), None);
    }
}
