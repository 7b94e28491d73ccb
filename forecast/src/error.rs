//! Error types for harvest forecasting

use thiserror::Error;
use uuid::Uuid;

use crate::types::Month;

/// Forecasting failures
///
/// Every failure is a data error on the caller's side; nothing here is
/// transient, so callers should report rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("Unknown month name: {0}")]
    UnknownMonth(String),

    #[error("No ripening transition rates calibrated for {0}")]
    UnsupportedMonth(Month),

    #[error("Plot {plot} has no analysis to forecast from")]
    MissingAnalysis { plot: Uuid },
}

/// Result type alias for forecasting operations
pub type ForecastResult<T> = Result<T, ForecastError>;
