//! Crate-level error types.

use std::fmt;

/// Errors produced by the gimbal crate.
///
/// Controller operations themselves never fail; raycast misses and
/// degenerate inputs are handled as silent no-ops. Errors exist only on
/// the properties preset file surface.
#[derive(Debug)]
pub enum GimbalError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML properties parsing/serialization failure.
    PropertiesParse(String),
}

impl fmt::Display for GimbalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::PropertiesParse(msg) => {
                write!(f, "properties parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GimbalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::PropertiesParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GimbalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
