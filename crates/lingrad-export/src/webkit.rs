//! `-webkit-gradient(linear, ...)` output.

use lingrad_core::{CornerBox, ResolvedStop};

/// Function name of the legacy gradient syntax.
pub const LEGACY_PREFIX: &str = "-webkit-gradient";

/// Where a stop sits in the list; endpoints get the `from()`/`to()` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopRole {
    First,
    Interior,
    Last,
}

impl StopRole {
    fn for_index(index: usize, last: usize) -> Self {
        if index == 0 {
            StopRole::First
        } else if index == last {
            StopRole::Last
        } else {
            StopRole::Interior
        }
    }
}

/// Render corners and resolved stops as a legacy gradient value.
pub fn write_legacy_gradient(corners: &CornerBox, stops: &[ResolvedStop]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}(linear, {}", LEGACY_PREFIX, corners));

    let last = stops.len().saturating_sub(1);
    for (i, stop) in stops.iter().enumerate() {
        out.push_str(", ");
        write_stop(&mut out, stop, StopRole::for_index(i, last));
    }

    out.push(')');
    out
}

fn write_stop(out: &mut String, stop: &ResolvedStop, role: StopRole) {
    let position = stop.computed_position.unwrap_or_default();

    match role {
        StopRole::First if position == 0.0 => {
            out.push_str(&format!("from({})", stop.color));
        }
        StopRole::Last if position == 1.0 => {
            out.push_str(&format!("to({})", stop.color));
        }
        _ => {
            out.push_str(&format!(
                "color-stop({}, {})",
                format_position(position),
                stop.color
            ));
        }
    }
}

/// Shortest round-trip form of a fraction, without a negative zero.
fn format_position(position: f64) -> String {
    format!("{}", position + 0.0)
}
