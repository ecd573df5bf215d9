//! Direction and position resolution for parsed gradients.
//!
//! This crate resolves:
//! - Directions (keywords or angles) into the corner box of the legacy syntax
//! - Implicit color-stop positions into definite fractions

mod direction;
mod positions;

pub use direction::{angle_to_side, normalize_angle, normalize_direction};
pub use positions::{resolve_positions, round2};

use lingrad_core::{ConversionError, CornerBox, ParsedGradient, ResolvedStop};

/// Resolve both the corner box and the stop positions of a gradient.
pub fn resolve(gradient: &ParsedGradient) -> Result<(CornerBox, Vec<ResolvedStop>), ConversionError> {
    let corners = normalize_direction(&gradient.direction)?;
    let stops = resolve_positions(&gradient.stops)?;
    Ok((corners, stops))
}
