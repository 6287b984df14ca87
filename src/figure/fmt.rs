//! matplotlib format-string shorthand (`"r-"`, `"b--"`, `"go:"`)
//!
//! A format string combines at most one color, one line style and one
//! marker, in any order.

use super::color::{base_color, Rgba};
use crate::igor::error::{IgorError, Result};
use crate::igor::markers::MARKER_TABLE;

/// Attributes declared by a format string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatSpec {
    pub color: Option<Rgba>,
    pub line_style: Option<String>,
    pub marker: Option<String>,
}

impl FormatSpec {
    /// Parse a format string such as `"r-"` or `"C1o--"`
    pub fn parse(fmt: &str) -> Result<Self> {
        // A full color name ("red", "tab:blue", "0.5") is a valid format string
        if fmt.chars().count() > 1 {
            if let Ok(color) = Rgba::parse(fmt) {
                return Ok(FormatSpec {
                    color: Some(color),
                    ..Default::default()
                });
            }
        }

        let err = || IgorError::Format(fmt.to_string());
        let mut spec = FormatSpec::default();
        let chars: Vec<char> = fmt.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let token = c.to_string();
            let next = chars.get(i + 1).copied();

            // Two-character line styles take priority over '-' alone
            if c == '-' && matches!(next, Some('-') | Some('.')) {
                set_once(&mut spec.line_style, chars[i..i + 2].iter().collect(), err)?;
                i += 2;
                continue;
            }

            if c == '-' || c == ':' {
                set_once(&mut spec.line_style, token, err)?;
            } else if c == 'C' && next.is_some_and(|d| d.is_ascii_digit()) {
                let digits: String = chars[i + 1..]
                    .iter()
                    .take_while(|d| d.is_ascii_digit())
                    .collect();
                let color = Rgba::parse(&format!("C{}", digits))?;
                set_once(&mut spec.color, color, err)?;
                i += 1 + digits.len();
                continue;
            } else if MARKER_TABLE.contains_key(token.as_str()) {
                set_once(&mut spec.marker, token, err)?;
            } else if let Some(color) = base_color(&token) {
                set_once(&mut spec.color, color, err)?;
            } else {
                return Err(err());
            }
            i += 1;
        }

        Ok(spec)
    }
}

/// Store a value unless the slot is already taken (e.g. `"r-b"`)
fn set_once<T>(slot: &mut Option<T>, value: T, err: impl Fn() -> IgorError) -> Result<()> {
    if slot.is_some() {
        return Err(err());
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_and_solid_line() {
        let spec = FormatSpec::parse("r-").unwrap();
        assert_eq!(spec.color, Some(Rgba::rgb(1.0, 0.0, 0.0)));
        assert_eq!(spec.line_style.as_deref(), Some("-"));
        assert_eq!(spec.marker, None);
    }

    #[test]
    fn test_two_char_line_styles() {
        assert_eq!(FormatSpec::parse("b--").unwrap().line_style.as_deref(), Some("--"));
        assert_eq!(FormatSpec::parse("k-.").unwrap().line_style.as_deref(), Some("-."));
        assert_eq!(FormatSpec::parse(":").unwrap().line_style.as_deref(), Some(":"));
    }

    #[test]
    fn test_marker_line_color_any_order() {
        let spec = FormatSpec::parse("o:g").unwrap();
        assert_eq!(spec.marker.as_deref(), Some("o"));
        assert_eq!(spec.line_style.as_deref(), Some(":"));
        assert_eq!(spec.color, Some(Rgba::rgb(0.0, 0.5, 0.0)));
    }

    #[test]
    fn test_cycle_color() {
        let spec = FormatSpec::parse("C1D--").unwrap();
        assert_eq!(spec.color, Some(Rgba::parse("tab:orange").unwrap()));
        assert_eq!(spec.marker.as_deref(), Some("D"));
        assert_eq!(spec.line_style.as_deref(), Some("--"));
    }

    #[test]
    fn test_full_color_name() {
        let spec = FormatSpec::parse("red").unwrap();
        assert_eq!(spec.color, Some(Rgba::rgb(1.0, 0.0, 0.0)));
        assert_eq!(spec.line_style, None);
    }

    #[test]
    fn test_marker_only() {
        let spec = FormatSpec::parse("^").unwrap();
        assert_eq!(spec.marker.as_deref(), Some("^"));
        assert_eq!(spec.line_style, None);
        assert_eq!(spec.color, None);
    }

    #[test]
    fn test_invalid_format_strings() {
        assert!(matches!(FormatSpec::parse("r-b"), Err(IgorError::Format(_))));
        assert!(matches!(FormatSpec::parse("--:"), Err(IgorError::Format(_))));
        assert!(matches!(FormatSpec::parse("q"), Err(IgorError::Format(_))));
    }
}
