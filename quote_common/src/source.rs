//! Contract for anything that can supply the latest quote for a known symbol.
use crate::quote::Quote;
use crate::result::Result;

/// Supplier of quote snapshots.
///
/// Implementations return [`crate::QuoteError::ConnectionFailure`] when the
/// underlying feed is unreachable. Callers do not retry; a single failed fetch is
/// a single reported failure.
pub trait QuoteSource: Send {
    /// Fetch the most recent snapshot. May be called any number of times.
    fn current_quote(&mut self) -> Result<Quote>;
}

impl<T: QuoteSource + ?Sized> QuoteSource for Box<T> {
    fn current_quote(&mut self) -> Result<Quote> {
        (**self).current_quote()
    }
}
