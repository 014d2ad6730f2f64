use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("invalid sample {index}: {field} {reason}")]
    InvalidSample {
        /// Position of the offending sample (or data row) in the
        /// route.
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("invalid region {name}: {reason}")]
    InvalidRegion { name: String, reason: String },

    #[error("no samples in {0}")]
    Empty(PathBuf),
}

impl RouteError {
    pub(crate) fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSample {
            index,
            field,
            reason: reason.into(),
        }
    }
}
