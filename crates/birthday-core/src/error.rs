//! Error types for page configuration

use thiserror::Error;

/// Common result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or loading a page configuration.
///
/// The derived computations themselves are total; only configuration can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Month outside 1-12, or a day the month can never have
    #[error("Invalid month/day: {month}/{day}")]
    InvalidMonthDay { month: u32, day: u32 },

    /// Configuration values that break a selector's size requirements
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
