//! Cache header error types.

use thiserror::Error;

/// Errors that can occur when writing cache headers.
#[derive(Error, Debug)]
pub enum CacheHeaderError {
    /// The header collection rejected a value.
    #[error("Invalid value for header {name}: {source}")]
    InvalidHeaderValue {
        /// Header the value was destined for.
        name: &'static str,
        /// Underlying `http` error.
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}
