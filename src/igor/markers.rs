//! Marker and line-style lookup tables
//!
//! Maps matplotlib marker glyphs and line-style tokens onto Igor Pro's
//! `marker` and `lstyle` codes. The two enumerations do not line up 1:1:
//! Igor has no octagon (hexagon is used instead) and only one "tri" marker,
//! so several matplotlib tokens collapse onto the same code.
//!
//! Lookups are total. Unknown tokens fall back to a filled circle (markers)
//! or a solid line (line styles).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Igor marker code for a filled circle
pub const DEFAULT_MARKER: i32 = 19;

/// Igor line style code for a solid line
pub const DEFAULT_LINE_STYLE: i32 = 0;

/// matplotlib marker token → Igor marker code
pub static MARKER_TABLE: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("o", 19), // filled circle
        ("s", 16), // filled square
        ("^", 17), // up triangle
        ("v", 23), // down triangle
        ("<", 46), // left triangle
        (">", 49), // right triangle
        ("p", 52), // pentagon
        ("8", 55), // octagon, Igor has none so use hexagon
        ("h", 55), // hexagon 1
        ("H", 55), // hexagon 2
        ("d", 29), // thin diamond
        ("D", 18), // diamond
        ("|", 10), // vertical line
        ("_", 9),  // horizontal line
        ("x", 1),  // x
        ("+", 0),  // +
        ("*", 60), // star
        ("1", 58), // tri_down
        ("2", 58), // tri_up
        ("3", 58), // tri_left
        ("4", 58), // tri_right
    ])
});

/// matplotlib line style token → Igor lstyle code
pub static LINE_STYLE_TABLE: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("-", 0),
        ("solid", 0),
        ("--", 3),
        ("dashed", 3),
        ("-.", 5),
        ("dashdot", 5),
        (":", 1),
        ("dotted", 1),
    ])
});

/// Get the Igor marker code for a matplotlib marker token
pub fn marker_code(token: &str) -> i32 {
    MARKER_TABLE.get(token).copied().unwrap_or_else(|| {
        tracing::debug!(token, "unmapped marker, using filled circle");
        DEFAULT_MARKER
    })
}

/// Get the Igor lstyle code for a matplotlib line style token
pub fn line_style_code(token: &str) -> i32 {
    LINE_STYLE_TABLE.get(token).copied().unwrap_or_else(|| {
        tracing::debug!(token, "unmapped line style, using solid");
        DEFAULT_LINE_STYLE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_codes() {
        assert_eq!(marker_code("o"), 19);
        assert_eq!(marker_code("s"), 16);
        assert_eq!(marker_code("^"), 17);
        assert_eq!(marker_code("v"), 23);
        assert_eq!(marker_code("<"), 46);
        assert_eq!(marker_code(">"), 49);
        assert_eq!(marker_code("p"), 52);
        assert_eq!(marker_code("d"), 29);
        assert_eq!(marker_code("D"), 18);
        assert_eq!(marker_code("|"), 10);
        assert_eq!(marker_code("_"), 9);
        assert_eq!(marker_code("x"), 1);
        assert_eq!(marker_code("+"), 0);
        assert_eq!(marker_code("*"), 60);
    }

    #[test]
    fn test_marker_collapsed_shapes() {
        // Octagon and both hexagons share Igor's hexagon
        for token in ["8", "h", "H"] {
            assert_eq!(marker_code(token), 55);
        }
        // All tri markers map to the single upward tri
        for token in ["1", "2", "3", "4"] {
            assert_eq!(marker_code(token), 58);
        }
    }

    #[test]
    fn test_marker_unknown_defaults_to_circle() {
        assert_eq!(marker_code("P"), DEFAULT_MARKER);
        assert_eq!(marker_code(""), DEFAULT_MARKER);
        assert_eq!(marker_code("circle"), DEFAULT_MARKER);
        assert_eq!(marker_code("$\\alpha$"), DEFAULT_MARKER);
    }

    #[test]
    fn test_line_style_short_and_long_forms_agree() {
        assert_eq!(line_style_code("-"), line_style_code("solid"));
        assert_eq!(line_style_code("--"), line_style_code("dashed"));
        assert_eq!(line_style_code("-."), line_style_code("dashdot"));
        assert_eq!(line_style_code(":"), line_style_code("dotted"));

        assert_eq!(line_style_code("solid"), 0);
        assert_eq!(line_style_code("dashed"), 3);
        assert_eq!(line_style_code("dashdot"), 5);
        assert_eq!(line_style_code("dotted"), 1);
    }

    #[test]
    fn test_line_style_unknown_defaults_to_solid() {
        assert_eq!(line_style_code("None"), DEFAULT_LINE_STYLE);
        assert_eq!(line_style_code("loosely dotted"), DEFAULT_LINE_STYLE);
        assert_eq!(line_style_code(""), DEFAULT_LINE_STYLE);
    }
}
