//! Single-symbol quote analyzer.
//!
//! The analyzer pulls snapshots from a [`QuoteSource`](quote_common::QuoteSource),
//! keeps the two most recent ones, derives price metrics from them and picks an
//! audio cue for the latest session movement:
//! - `analyzer` — `QuoteAnalyzer` and its builder.
//! - `history` — the two-slot snapshot state machine.
//! - `mood` — the cue selection policy.
#![warn(missing_docs)]
pub mod analyzer;
pub mod history;
pub mod mood;

pub use analyzer::{QuoteAnalyzer, QuoteAnalyzerBuilder};
pub use history::{HistoryState, QuoteHistory};
pub use mood::select_cue;
