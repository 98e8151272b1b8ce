//! Crate-level error types.

use std::fmt;

use crate::geometry::GeometryError;

/// Errors produced by the caliper crate.
#[derive(Debug)]
pub enum CaliperError {
    /// Degenerate geometry in a measurement computation.
    Geometry(GeometryError),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Measurement export serialization failure.
    Export(serde_json::Error),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for CaliperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Export(e) => write!(f, "export error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CaliperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<GeometryError> for CaliperError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<serde_json::Error> for CaliperError {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(e)
    }
}

impl From<std::io::Error> for CaliperError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
