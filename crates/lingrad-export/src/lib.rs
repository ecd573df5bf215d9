//! Export formats for resolved gradients.
//!
//! Supported formats:
//! - Legacy WebKit `-webkit-gradient(linear, ...)` syntax

pub mod webkit;

use lingrad_core::{CornerBox, ResolvedStop};

pub use webkit::LEGACY_PREFIX;

/// Export a resolved gradient in legacy WebKit syntax.
pub fn export_webkit(corners: &CornerBox, stops: &[ResolvedStop]) -> String {
    webkit::write_legacy_gradient(corners, stops)
}
