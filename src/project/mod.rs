//! Loading units and running a whole-corpus analysis.

mod analyzer;
mod config;
mod error;
pub mod file_loader;
mod summary;

pub use analyzer::{Analysis, Analyzer};
pub use config::AnalyzerConfig;
pub use error::{LoadError, UnitError};
pub use file_loader::{collect_file_paths, load_file};
pub use summary::{AnalysisSummary, UnitFailure, UnitSummary};
