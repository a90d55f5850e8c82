//! Loading and per-unit failure types.

use std::path::PathBuf;

use thiserror::Error;

use crate::hir::CatalogError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a unit contributed no entities.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("processing panicked: {0}")]
    Panicked(String),
}
