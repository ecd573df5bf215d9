//! Value types for parsed and resolved gradients.

use smallvec::SmallVec;
use std::fmt;

/// One edge of the gradient box, as written in a direction keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gradient direction exactly as captured from the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawDirection {
    /// One or two compass keywords, in source order (e.g. `top left`).
    Keywords(SmallVec<[Side; 2]>),
    /// An angle in degrees, not yet normalized.
    Angle(f64),
}

impl RawDirection {
    /// Build a keyword direction from a single side.
    pub fn side(side: Side) -> Self {
        let mut sides = SmallVec::new();
        sides.push(side);
        RawDirection::Keywords(sides)
    }
}

impl Default for RawDirection {
    /// Gradients without a direction run from the top edge.
    fn default() -> Self {
        RawDirection::side(Side::Top)
    }
}

impl fmt::Display for RawDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDirection::Keywords(sides) => {
                for (i, side) in sides.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", side)?;
                }
                Ok(())
            }
            RawDirection::Angle(deg) => write!(f, "{}deg", deg),
        }
    }
}

/// A color stop before position resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawStop {
    /// Color token, passed through verbatim to the output.
    pub color: String,
    /// Position token as written (`50%`, `10px`, `0`), if any.
    pub position: Option<String>,
}

impl RawStop {
    pub fn new(color: impl Into<String>, position: Option<&str>) -> Self {
        Self {
            color: color.into(),
            position: position.map(str::to_string),
        }
    }
}

/// A single recognized `linear-gradient(...)` expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedGradient {
    pub direction: RawDirection,
    pub stops: SmallVec<[RawStop; 4]>,
    /// The expression this gradient was parsed from.
    pub source_text: String,
}

impl fmt::Display for ParsedGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_text)
    }
}

/// A color stop with its computed fractional position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedStop {
    pub color: String,
    pub position: Option<String>,
    /// Fraction along the gradient axis; `None` until resolution assigns it.
    pub computed_position: Option<f64>,
}

impl ResolvedStop {
    /// Start resolving a raw stop with no computed position yet.
    pub fn unresolved(stop: &RawStop) -> Self {
        Self {
            color: stop.color.clone(),
            position: stop.position.clone(),
            computed_position: None,
        }
    }

    /// Create a stop with a known position.
    pub fn at(color: impl Into<String>, computed_position: f64) -> Self {
        Self {
            color: color.into(),
            position: None,
            computed_position: Some(computed_position),
        }
    }
}

/// One coordinate of a corner box endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coord {
    #[default]
    Zero,
    Full,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coord::Zero => f.write_str("0"),
            Coord::Full => f.write_str("100%"),
        }
    }
}

/// Start and end points of a legacy gradient, as `(x, y)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerBox {
    pub start: (Coord, Coord),
    pub end: (Coord, Coord),
}

impl CornerBox {
    pub const fn new(start: (Coord, Coord), end: (Coord, Coord)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for CornerBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_default_direction_is_top() {
        assert_eq!(RawDirection::default(), RawDirection::side(Side::Top));
        assert_eq!(RawDirection::default().to_string(), "top");
    }

    #[test]
    fn test_direction_display() {
        let dir = RawDirection::Keywords(smallvec![Side::Bottom, Side::Right]);
        assert_eq!(dir.to_string(), "bottom right");
        assert_eq!(RawDirection::Angle(45.0).to_string(), "45deg");
        assert_eq!(RawDirection::Angle(-12.5).to_string(), "-12.5deg");
    }

    #[test]
    fn test_corner_box_display() {
        let corners = CornerBox::new((Coord::Full, Coord::Zero), (Coord::Zero, Coord::Full));
        assert_eq!(corners.to_string(), "100% 0, 0 100%");
        assert_eq!(CornerBox::default().to_string(), "0 0, 0 0");
    }

    #[test]
    fn test_parsed_gradient_displays_source() {
        let gradient = ParsedGradient {
            direction: RawDirection::default(),
            stops: smallvec![RawStop::new("red", None), RawStop::new("blue", Some("80%"))],
            source_text: "linear-gradient(red, blue 80%)".to_string(),
        };
        assert_eq!(gradient.to_string(), "linear-gradient(red, blue 80%)");
    }

    #[test]
    fn test_unresolved_stop_keeps_raw_fields() {
        let raw = RawStop::new("#fff", Some("35%"));
        let stop = ResolvedStop::unresolved(&raw);
        assert_eq!(stop.color, "#fff");
        assert_eq!(stop.position.as_deref(), Some("35%"));
        assert!(stop.computed_position.is_none());
    }
}
