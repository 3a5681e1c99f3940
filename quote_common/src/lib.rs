//!
//! Common types and contracts shared by the quote analyzer and its drivers.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the immutable `Quote` snapshot.
//! - `symbol` — validated ticker symbols.
//! - `source` — the `QuoteSource` contract for fetching snapshots.
//! - `audio` — the `AudioSignal` contract and the `Cue` it plays.
#![warn(missing_docs)]
pub mod audio;
pub mod error;
pub mod quote;
pub mod result;
pub mod source;
pub mod symbol;

pub use audio::{AudioSignal, Cue};
pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
pub use source::QuoteSource;
pub use symbol::Symbol;
