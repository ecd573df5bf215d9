//! Direction normalization.
//!
//! The legacy syntax has no direction keywords or angles: a gradient runs
//! between two corners of the box, each coordinate either `0` or `100%`.

use lingrad_core::{ConversionError, Coord, CornerBox, RawDirection, Side};

/// Map a raw direction to the start/end corners of the legacy syntax.
pub fn normalize_direction(direction: &RawDirection) -> Result<CornerBox, ConversionError> {
    match direction {
        RawDirection::Keywords(sides) => Ok(corners_for(sides)),
        RawDirection::Angle(deg) => angle_to_side(*deg)
            .map(|side| corners_for(&[side]))
            .ok_or_else(|| {
                tracing::debug!(angle = deg, "angle has no legacy equivalent");
                ConversionError::UnsupportedDirection {
                    direction: direction.to_string(),
                }
            }),
    }
}

/// Normalize an angle into `[0, 360)`.
pub fn normalize_angle(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// The keyword an angle corresponds to, if the legacy syntax can express it.
///
/// Only the four axis-aligned angles convert: 0deg runs from the left edge,
/// 90deg from the bottom, 180deg from the right and 270deg from the top.
pub fn angle_to_side(deg: f64) -> Option<Side> {
    let deg = normalize_angle(deg);
    if deg == 0.0 {
        Some(Side::Left)
    } else if deg == 90.0 {
        Some(Side::Bottom)
    } else if deg == 180.0 {
        Some(Side::Right)
    } else if deg == 270.0 {
        Some(Side::Top)
    } else {
        None
    }
}

/// A side moves the end point to the opposite edge on its axis; an axis
/// without a keyword stays at `0 0`.
fn corners_for(sides: &[Side]) -> CornerBox {
    let mut corners = CornerBox::default();

    if sides.contains(&Side::Left) {
        corners.end.0 = Coord::Full;
    } else if sides.contains(&Side::Right) {
        corners.start.0 = Coord::Full;
    }

    if sides.contains(&Side::Top) {
        corners.end.1 = Coord::Full;
    } else if sides.contains(&Side::Bottom) {
        corners.start.1 = Coord::Full;
    }

    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(sides: &[Side]) -> RawDirection {
        RawDirection::Keywords(sides.iter().copied().collect())
    }

    fn corners(direction: &RawDirection) -> String {
        normalize_direction(direction).unwrap().to_string()
    }

    #[test]
    fn test_single_keywords() {
        assert_eq!(corners(&keywords(&[Side::Left])), "0 0, 100% 0");
        assert_eq!(corners(&keywords(&[Side::Right])), "100% 0, 0 0");
        assert_eq!(corners(&keywords(&[Side::Top])), "0 0, 0 100%");
        assert_eq!(corners(&keywords(&[Side::Bottom])), "0 100%, 0 0");
    }

    #[test]
    fn test_corner_keywords() {
        assert_eq!(corners(&keywords(&[Side::Top, Side::Left])), "0 0, 100% 100%");
        assert_eq!(corners(&keywords(&[Side::Left, Side::Top])), "0 0, 100% 100%");
        assert_eq!(corners(&keywords(&[Side::Bottom, Side::Right])), "100% 100%, 0 0");
        assert_eq!(corners(&keywords(&[Side::Right, Side::Top])), "100% 0, 0 100%");
    }

    #[test]
    fn test_angle_normalization() {
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn test_supported_angles() {
        assert_eq!(angle_to_side(0.0), Some(Side::Left));
        assert_eq!(angle_to_side(90.0), Some(Side::Bottom));
        assert_eq!(angle_to_side(180.0), Some(Side::Right));
        assert_eq!(angle_to_side(270.0), Some(Side::Top));
        assert_eq!(angle_to_side(-90.0), Some(Side::Top));
        assert_eq!(angle_to_side(720.0), Some(Side::Left));
    }

    #[test]
    fn test_angles_match_keywords() {
        for (deg, side) in [
            (0.0, Side::Left),
            (90.0, Side::Bottom),
            (180.0, Side::Right),
            (270.0, Side::Top),
        ] {
            assert_eq!(
                normalize_direction(&RawDirection::Angle(deg)).unwrap(),
                normalize_direction(&RawDirection::side(side)).unwrap()
            );
        }
    }

    #[test]
    fn test_unsupported_angles() {
        for deg in [45.0, 240.0, 89.5, 1.0, f64::NAN] {
            assert_eq!(angle_to_side(deg), None, "{deg}");
        }
        let err = normalize_direction(&RawDirection::Angle(45.0)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnsupportedDirection {
                direction: "45deg".to_string()
            }
        );
    }
}
