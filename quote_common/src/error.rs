//! Error types shared between the analyzer, its collaborators and the monitor.
//!
//! The `QuoteError` enum unifies construction failures, feed outages and
//! premature metric queries, allowing every crate to propagate a single error type.
use thiserror::Error;

/// Unified error type shared by the whole workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A required constructor argument was never supplied; names the argument.
    #[error("Missing required argument: {0}")]
    NullReference(&'static str),

    /// Symbol does not match the accepted ticker format.
    #[error("Invalid stock symbol: {0:?}")]
    InvalidSymbol(String),

    /// The quote feed could not be reached while fetching a snapshot.
    #[error("Unable to connect with quote source: {0}")]
    ConnectionFailure(String),

    /// A metric was requested before enough snapshots were available.
    #[error("Invalid analysis state: {0}")]
    InvalidAnalysisState(String),

    /// Failure while encoding a quote via serde_json.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Installing the process signal handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}
