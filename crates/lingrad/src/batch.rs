//! Conversion of property values holding several gradients.

use lingrad_core::ConversionError;
use rayon::prelude::*;
use thiserror::Error;

use crate::config::{BatchPolicy, ConvertOptions};
use crate::convert::convert_with;

/// A gradient that failed to convert inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFailure {
    /// Position of the segment in the value, counting from 0.
    pub index: usize,
    pub segment: String,
    pub error: ConversionError,
}

/// Result of converting a whole property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchOutput {
    /// Output segments joined with `", "`.
    pub value: String,
    /// Number of segments that converted successfully.
    pub converted: usize,
    /// Segments that failed under a non-aborting policy.
    pub failures: Vec<SegmentFailure>,
}

/// A batch stopped by [`BatchPolicy::Abort`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Gradient {index} ({segment:?}) could not be converted: {source}")]
pub struct BatchError {
    pub index: usize,
    pub segment: String,
    #[source]
    pub source: ConversionError,
}

/// Split a property value into its top-level comma-separated segments.
///
/// Commas inside parentheses (color functions, nested calls) do not split.
/// Segments are trimmed and empty ones dropped.
pub fn split_gradient_list(value: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut paren_depth = 0usize;

    for (i, c) in value.char_indices() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            ',' if paren_depth == 0 => {
                segments.push(value[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    segments.push(value[start..].trim());
    segments.retain(|s| !s.is_empty());
    segments
}

/// Convert every gradient in a property value.
///
/// Results keep the order of the input even when `options.parallel` is
/// set; failures are handled according to `options.policy`.
#[tracing::instrument(level = "debug", skip(options), fields(policy = ?options.policy))]
pub fn convert_batch(value: &str, options: &ConvertOptions) -> Result<BatchOutput, BatchError> {
    let segments = split_gradient_list(value);

    let results: Vec<Result<String, ConversionError>> = if options.parallel {
        segments
            .par_iter()
            .map(|segment| convert_with(segment, options))
            .collect()
    } else {
        segments
            .iter()
            .map(|segment| convert_with(segment, options))
            .collect()
    };

    let mut output = BatchOutput::default();
    let mut parts = Vec::with_capacity(results.len());

    for (index, (segment, result)) in segments.iter().zip(results).enumerate() {
        let error = match result {
            Ok(converted) => {
                parts.push(converted);
                output.converted += 1;
                continue;
            }
            Err(error) => error,
        };

        match options.policy {
            BatchPolicy::Abort => {
                return Err(BatchError {
                    index,
                    segment: segment.to_string(),
                    source: error,
                });
            }
            BatchPolicy::Skip => {
                tracing::warn!(index, %segment, %error, "skipping gradient");
            }
            BatchPolicy::KeepSource => {
                tracing::warn!(index, %segment, %error, "keeping gradient unconverted");
                parts.push(segment.to_string());
            }
        }

        output.failures.push(SegmentFailure {
            index,
            segment: segment.to_string(),
            error,
        });
    }

    output.value = parts.join(", ");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GRADIENTS: &str =
        "linear-gradient(top left, #a6f2c0 30%, #fff 35%, rgba(180, 200, 210, .9) 90%), linear-gradient(left, red, blue)";

    #[test]
    fn test_split_respects_parentheses() {
        let segments = split_gradient_list(TWO_GRADIENTS);
        assert_eq!(
            segments,
            [
                "linear-gradient(top left, #a6f2c0 30%, #fff 35%, rgba(180, 200, 210, .9) 90%)",
                "linear-gradient(left, red, blue)",
            ]
        );
    }

    #[test]
    fn test_split_drops_empty_segments() {
        assert!(split_gradient_list("").is_empty());
        assert!(split_gradient_list("  ,  ").is_empty());
        assert_eq!(split_gradient_list("a, ,b"), ["a", "b"]);
    }

    #[test]
    fn test_split_unbalanced_parentheses() {
        assert_eq!(split_gradient_list("a), b"), ["a)", "b"]);
        assert_eq!(split_gradient_list("f(a, b"), ["f(a, b"]);
    }

    #[test]
    fn test_batch_joins_results() {
        let output = convert_batch(TWO_GRADIENTS, &ConvertOptions::default()).unwrap();
        assert_eq!(
            output.value,
            "-webkit-gradient(linear, 0 0, 100% 100%, color-stop(0.3, #a6f2c0), color-stop(0.35, #fff), color-stop(0.9, rgba(180, 200, 210, .9))), \
             -webkit-gradient(linear, 0 0, 100% 0, from(red), to(blue))"
        );
        assert_eq!(output.converted, 2);
        assert!(output.failures.is_empty());
    }

    #[test]
    fn test_abort_policy() {
        let value = "linear-gradient(red, blue), radial-gradient(red, blue)";
        let err = convert_batch(value, &ConvertOptions::default()).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.segment, "radial-gradient(red, blue)");
        assert!(matches!(err.source, ConversionError::NotRecognized { .. }));
    }

    #[test]
    fn test_skip_policy() {
        let value = "linear-gradient(45deg, red, blue), linear-gradient(red, blue)";
        let options = ConvertOptions::default().with_policy(BatchPolicy::Skip);
        let output = convert_batch(value, &options).unwrap();
        assert_eq!(
            output.value,
            "-webkit-gradient(linear, 0 0, 0 100%, from(red), to(blue))"
        );
        assert_eq!(output.converted, 1);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].index, 0);
        assert!(matches!(
            output.failures[0].error,
            ConversionError::UnsupportedDirection { .. }
        ));
    }

    #[test]
    fn test_keep_source_policy() {
        let value = "url(a.png), linear-gradient(red, blue)";
        let options = ConvertOptions::default().with_policy(BatchPolicy::KeepSource);
        let output = convert_batch(value, &options).unwrap();
        assert_eq!(
            output.value,
            "url(a.png), -webkit-gradient(linear, 0 0, 0 100%, from(red), to(blue))"
        );
        assert_eq!(output.failures[0].segment, "url(a.png)");
    }

    #[test]
    fn test_parallel_keeps_order() {
        let value = (0..32)
            .map(|i| {
                if i % 2 == 0 {
                    "linear-gradient(left, red, blue)"
                } else {
                    "linear-gradient(right, red, blue)"
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let sequential = convert_batch(&value, &ConvertOptions::default()).unwrap();
        let parallel =
            convert_batch(&value, &ConvertOptions::default().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.converted, 32);
    }

    #[test]
    fn test_empty_value() {
        let output = convert_batch("", &ConvertOptions::default()).unwrap();
        assert_eq!(output, BatchOutput::default());
    }
}
