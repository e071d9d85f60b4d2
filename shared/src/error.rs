//! Errors surfaced by the forecast library

use thiserror::Error;

/// Recoverable outcomes of a forecast lookup.
///
/// Broken generator preconditions (empty pools, oversized unique draws) are
/// not represented here; they panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("County not found: {0}")]
    NotFound(String),

    #[error("Unknown climate region: {0}")]
    UnknownRegion(String),
}

pub type ForecastResult<T> = Result<T, ForecastError>;
