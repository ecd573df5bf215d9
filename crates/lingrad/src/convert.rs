//! Single-expression conversion pipeline.

use lingrad_core::ConversionError;

use crate::config::ConvertOptions;

/// Fewest stops a gradient needs for a meaningful legacy conversion.
pub const DEFAULT_MIN_STOPS: usize = 2;

/// Convert one `linear-gradient(...)` expression with default options.
pub fn convert(expression: &str) -> Result<String, ConversionError> {
    convert_with(expression, &ConvertOptions::default())
}

/// Convert one `linear-gradient(...)` expression.
///
/// Only [`ConvertOptions::min_stops`] applies here; the other options
/// concern batches.
#[tracing::instrument(level = "debug", skip(options))]
pub fn convert_with(expression: &str, options: &ConvertOptions) -> Result<String, ConversionError> {
    let gradient = lingrad_parser::parse_gradient(expression)?;

    if gradient.stops.len() < options.min_stops {
        return Err(ConversionError::TooFewStops {
            found: gradient.stops.len(),
            required: options.min_stops,
        });
    }

    let (corners, stops) = lingrad_resolver::resolve(&gradient)?;
    let legacy = lingrad_export::export_webkit(&corners, &stops);

    tracing::debug!(%legacy, "converted gradient");
    Ok(legacy)
}
