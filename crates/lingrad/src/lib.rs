//! Convert CSS `linear-gradient(...)` values to the legacy
//! `-webkit-gradient(linear, ...)` syntax.
//!
//! The conversion runs as a pipeline of small crates:
//! 1. `lingrad-parser` recognizes the expression and lexes its stops
//! 2. `lingrad-resolver` maps the direction to corners and resolves positions
//! 3. `lingrad-export` writes the legacy syntax
//!
//! [`convert`] handles one expression; [`convert_batch`] handles a whole
//! property value with several comma-separated gradients.
//!
//! # Example
//!
//! ```ignore
//! let legacy = lingrad::convert("linear-gradient(top, red, blue)")?;
//! assert_eq!(legacy, "-webkit-gradient(linear, 0 0, 0 100%, from(red), to(blue))");
//! ```

mod batch;
mod config;
mod convert;

pub use batch::{convert_batch, split_gradient_list, BatchError, BatchOutput, SegmentFailure};
pub use config::{BatchPolicy, ConfigError, ConvertOptions};
pub use convert::{convert, convert_with, DEFAULT_MIN_STOPS};

pub use lingrad_core::{
    ConversionError, Coord, CornerBox, ErrorKind, ParsedGradient, RawDirection, RawStop,
    ResolvedStop, Side,
};
pub use lingrad_export::LEGACY_PREFIX;
pub use lingrad_parser::parse_gradient;
pub use lingrad_resolver::{normalize_direction, resolve_positions};
