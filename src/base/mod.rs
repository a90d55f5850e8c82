//! Foundation types for the gqlscan toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`UnitId`] - Identifier of an analyzed unit (one source file)
//! - [`LineRange`] - 1-based inclusive line ranges
//! - Text helpers (identifier checks, indentation width)
//! - Domain constants (file extensions, type tags)
//!
//! This module has NO dependencies on other gqlscan modules.

pub mod constants;
mod position;
pub mod text;
mod unit_id;

pub use position::LineRange;
pub use unit_id::UnitId;
