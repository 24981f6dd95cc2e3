// File: crates/ma-chart-core/src/error.rs
// Summary: Error type for the calculator, mapper and layout validation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Input outside the documented domain (zero period, empty series,
    /// non-finite values, impossible layout, unknown color).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChartError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
