//! Source units: raw input, decoding, and the scan of one unit.

pub mod file;
pub mod source;

pub use file::SourceUnit;
pub use source::{Encoding, SourceText, decode};
