//! Parser for CSS `linear-gradient(...)` values.
//!
//! This crate recognizes a single linear-gradient expression and splits it
//! into a raw direction and an ordered list of raw color stops.
//! Built on `nom`: every lexical class (number, length, color, direction)
//! is a separate scanner in [`lexer`], composed by the grammar.

pub mod lexer;
mod grammar;

pub use grammar::{lex_stops, match_gradient, MatchedGradient};

use lingrad_core::{ConversionError, ParsedGradient};

/// Parse a linear-gradient expression into its direction and stops.
///
/// # Example
///
/// ```ignore
/// use lingrad_parser::parse_gradient;
///
/// let gradient = parse_gradient("linear-gradient(left, red 0%, blue)")?;
/// assert_eq!(gradient.stops.len(), 2);
/// ```
pub fn parse_gradient(source: &str) -> Result<ParsedGradient, ConversionError> {
    grammar::parse(source)
}
