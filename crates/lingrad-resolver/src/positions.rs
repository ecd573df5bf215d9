//! Color-stop position resolution.
//!
//! Every stop receives a definite fraction along the gradient axis:
//! - The first stop defaults to 0 and the last to 1.
//! - Stops with an explicit percentage use it (`50%` -> `0.5`).
//! - Runs of stops without a position are spread evenly between the
//!   surrounding anchors, rounded to two decimals.
//! - A position lower than its predecessor is raised to match it.
//!
//! Percentages outside `0%..100%` are accepted as written; only the
//! ordering is corrected.

use lingrad_core::{ConversionError, RawStop, ResolvedStop};
use lingrad_parser::lexer::parse_percentage;

/// Assign a computed position to every stop.
pub fn resolve_positions(stops: &[RawStop]) -> Result<Vec<ResolvedStop>, ConversionError> {
    let mut resolved: Vec<ResolvedStop> = stops.iter().map(ResolvedStop::unresolved).collect();
    let last = resolved.len().saturating_sub(1);
    let mut last_anchor = 0;
    let mut pending = 0;

    for i in 0..resolved.len() {
        let position = match resolved[i].position.as_deref() {
            Some(raw) => explicit_position(&resolved[i].color, raw)?,
            None if i == 0 => 0.0,
            None if i == last => 1.0,
            None => {
                pending += 1;
                continue;
            }
        };
        resolved[i].computed_position = Some(position);

        if pending > 0 {
            fill_pending(&mut resolved, last_anchor, i, pending);
            pending = 0;
        }

        clamp_to_previous(&mut resolved, last_anchor, i);
        last_anchor = i;
    }

    Ok(resolved)
}

/// Round half-up to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn explicit_position(color: &str, raw: &str) -> Result<f64, ConversionError> {
    parse_percentage(raw)
        .map(|pct| pct / 100.0)
        .ok_or_else(|| ConversionError::NonPercentagePosition {
            color: color.to_string(),
            position: raw.to_string(),
        })
}

fn computed(stops: &[ResolvedStop], index: usize) -> f64 {
    stops[index].computed_position.unwrap_or_default()
}

/// Spread `count` unpositioned stops evenly between the anchors at `from`
/// and `to`, walking backward from `to - 1`.
fn fill_pending(stops: &mut [ResolvedStop], from: usize, to: usize, count: usize) {
    let start = computed(stops, from);
    let step = ((computed(stops, to) - start) / (to - from) as f64).max(0.0);

    let mut remaining = count;
    for j in (from + 1..to).rev() {
        stops[j].computed_position = Some(round2(start + step * remaining as f64));
        remaining -= 1;
    }

    tracing::trace!(from, to, step, "interpolated implicit stop positions");
}

/// Raise every position in `from + 1..=to` that falls below its predecessor.
fn clamp_to_previous(stops: &mut [ResolvedStop], from: usize, to: usize) {
    for k in (from + 1)..=to {
        let previous = computed(stops, k - 1);
        if computed(stops, k) < previous {
            stops[k].computed_position = Some(previous);
        }
    }
}
