//! Grammar rules for recognizing a single linear-gradient expression.
//!
//! Matching happens in two passes: the whole expression is first checked
//! against the grammar and split into a direction and a stop-list slice,
//! then the stop list is lexed into individual raw stops.

use lingrad_core::{ConversionError, ParsedGradient, RawDirection, RawStop};
use nom::{
    bytes::complete::tag,
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use smallvec::SmallVec;

use crate::lexer::{color, color_stop, direction};

/// A recognized expression whose stop list has not been split yet.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedGradient<'a> {
    /// Captured direction, or `top` when the expression omits it.
    pub direction: RawDirection,
    /// The comma-separated stop list, exactly as written.
    pub stop_list: &'a str,
}

/// Parse a complete gradient expression.
pub fn parse(input: &str) -> Result<ParsedGradient, ConversionError> {
    let matched = match_gradient(input)?;
    let stops = lex_stops(matched.stop_list)?;

    tracing::debug!(
        direction = %matched.direction,
        stops = stops.len(),
        "recognized linear gradient"
    );

    Ok(ParsedGradient {
        direction: matched.direction,
        stops,
        source_text: input.to_string(),
    })
}

/// Check that `input` is one `linear-gradient(...)` expression and capture
/// its direction and stop list.
pub fn match_gradient(input: &str) -> Result<MatchedGradient<'_>, ConversionError> {
    match all_consuming(linear_gradient)(input) {
        Ok((_, (direction, stop_list))) => Ok(MatchedGradient {
            direction: direction.unwrap_or_default(),
            stop_list,
        }),
        Err(_) => {
            tracing::debug!(input, "not a linear gradient");
            Err(ConversionError::not_recognized(input))
        }
    }
}

/// `linear-gradient( [direction ,] stop-list )`, with optional surrounding
/// whitespace. The direction is tried first so that `bottom` and `right`
/// are read as directions rather than color keywords.
fn linear_gradient(input: &str) -> IResult<&str, (Option<RawDirection>, &str)> {
    delimited(
        tuple((multispace0, tag("linear-gradient("), multispace0)),
        pair(
            opt(terminated(direction, pair(multispace0, char(',')))),
            preceded(multispace0, stop_list),
        ),
        pair(char(')'), multispace0),
    )(input)
}

fn stop_list(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(
        char(','),
        delimited(multispace0, color_stop, multispace0),
    ))(input)
}

/// Split a matched stop list into raw stops.
pub fn lex_stops(stop_list: &str) -> Result<SmallVec<[RawStop; 4]>, ConversionError> {
    split_stop_tokens(stop_list)
        .into_iter()
        .map(lex_stop)
        .collect()
}

/// Extract the color from a stop token; whatever follows is its position.
fn lex_stop(token: &str) -> Result<RawStop, ConversionError> {
    let token = token.trim();
    let (rest, color) = color(token).map_err(|_| ConversionError::MalformedStop {
        token: token.to_string(),
    })?;

    let position = rest.trim();
    let position = if position.is_empty() {
        None
    } else {
        Some(position)
    };

    Ok(RawStop::new(color, position))
}

/// Split a stop list by comma, respecting parentheses.
fn split_stop_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut paren_depth = 0usize;

    for (i, c) in input.char_indices() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            ',' if paren_depth == 0 => {
                tokens.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    tokens.push(&input[start..]);
    tokens
}
