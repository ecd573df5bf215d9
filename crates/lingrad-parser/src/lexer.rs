//! Lexical scanners for gradient values.
//!
//! Each scanner matches one lexical class and returns the matched text (or
//! its value), leaving the remainder for the grammar.

use lingrad_core::{RawDirection, Side};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit0, digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, recognize, value, verify},
    multi::many_m_n,
    sequence::{pair, terminated, tuple},
    IResult,
};
use smallvec::{smallvec, SmallVec};

/// Named colors shorter than five letters. Longer lowercase words are
/// accepted as keywords without a lookup.
const SHORT_COLOR_NAMES: &[&str] = &[
    "red", "tan", "grey", "gray", "lime", "navy", "blue", "teal", "aqua", "cyan", "gold", "peru",
    "pink", "plum", "snow",
];

/// Parse a number (`-?[0-9]*\.?[0-9]+`), returning its text.
pub fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(char('-')),
        alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
    ))(input)
}

/// Parse a length unit suffix.
pub fn unit(input: &str) -> IResult<&str, &str> {
    alt((
        tag("%"),
        tag("px"),
        tag("mm"),
        tag("cm"),
        tag("in"),
        tag("em"),
        tag("rem"),
        tag("en"),
        tag("ex"),
        tag("ch"),
        tag("vm"),
        tag("vw"),
        tag("vh"),
    ))(input)
}

/// Parse a length or percentage (`10px`, `50%`) or the bare literal `0`.
pub fn length(input: &str) -> IResult<&str, &str> {
    alt((recognize(pair(number, unit)), tag("0")))(input)
}

/// Parse a percentage, returning its value in percent (`50%` -> `50.0`).
/// The bare literal `0` counts as `0%`.
pub fn percentage(input: &str) -> IResult<&str, f64> {
    alt((
        map_res(terminated(number, char('%')), |n: &str| n.parse::<f64>()),
        value(0.0, char('0')),
    ))(input)
}

/// Parse a complete percentage token, or `None` if it is anything else.
pub fn parse_percentage(input: &str) -> Option<f64> {
    all_consuming(percentage)(input.trim()).ok().map(|(_, pct)| pct)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Parse a hex color with exactly three or six digits.
pub fn hex_color(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        char('#'),
        verify(take_while1(is_hex_digit), |digits: &str| {
            digits.len() == 3 || digits.len() == 6
        }),
    ))(input)
}

/// One argument of a color function: a number, optionally a percentage,
/// optionally followed by a comma.
fn color_argument(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        multispace0,
        number,
        opt(char('%')),
        multispace0,
        opt(char(',')),
        multispace0,
    )))(input)
}

/// Parse `rgb()`, `rgba()`, `hsl()` or `hsla()` with three or four arguments.
pub fn functional_color(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((tag("rgba"), tag("rgb"), tag("hsla"), tag("hsl"))),
        char('('),
        many_m_n(3, 4, color_argument),
        char(')'),
    )))(input)
}

/// Parse a named color keyword.
pub fn named_color(input: &str) -> IResult<&str, &str> {
    verify(take_while1(|c: char| c.is_ascii_lowercase()), |word: &str| {
        SHORT_COLOR_NAMES.contains(&word) || (5..=20).contains(&word.len())
    })(input)
}

/// Parse any supported color token.
pub fn color(input: &str) -> IResult<&str, &str> {
    alt((functional_color, hex_color, named_color))(input)
}

/// Parse a color stop: a color with an optional trailing length.
pub fn color_stop(input: &str) -> IResult<&str, &str> {
    recognize(tuple((color, multispace0, opt(length))))(input)
}

fn vertical_side(input: &str) -> IResult<&str, Side> {
    alt((value(Side::Top, tag("top")), value(Side::Bottom, tag("bottom"))))(input)
}

fn horizontal_side(input: &str) -> IResult<&str, Side> {
    alt((value(Side::Left, tag("left")), value(Side::Right, tag("right"))))(input)
}

/// Parse a single compass keyword.
pub fn side(input: &str) -> IResult<&str, Side> {
    alt((vertical_side, horizontal_side))(input)
}

/// Parse a keyword direction: one side, or one vertical and one horizontal
/// side in either order.
pub fn keyword_direction(input: &str) -> IResult<&str, SmallVec<[Side; 2]>> {
    alt((
        map(
            tuple((vertical_side, multispace1, horizontal_side)),
            |(v, _, h)| smallvec![v, h],
        ),
        map(
            tuple((horizontal_side, multispace1, vertical_side)),
            |(h, _, v)| smallvec![h, v],
        ),
        map(side, |s| smallvec![s]),
    ))(input)
}

/// Parse an angle in degrees (`45deg`) or the bare literal `0`.
pub fn angle(input: &str) -> IResult<&str, f64> {
    alt((
        map_res(terminated(number, tag("deg")), |n: &str| n.parse::<f64>()),
        value(0.0, char('0')),
    ))(input)
}

/// Parse a gradient direction.
pub fn direction(input: &str) -> IResult<&str, RawDirection> {
    alt((
        map(angle, RawDirection::Angle),
        map(keyword_direction, RawDirection::Keywords),
    ))(input)
}
