//! Core types and errors for the lingrad gradient converter.
//!
//! This crate provides the types shared by every pipeline stage:
//! - Parsed gradient model (direction, raw stops, source text)
//! - Resolved stops and the corner box consumed by the legacy serializer
//! - The conversion error taxonomy

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
