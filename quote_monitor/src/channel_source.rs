//! `QuoteSource` backed by a crossbeam channel.
use crossbeam_channel::{Receiver, RecvTimeoutError};
use quote_common::{Quote, QuoteError, QuoteSource, Result};
use std::time::Duration;

/// Reads the freshest quote published on a channel.
pub struct ChannelQuoteSource {
    rx: Receiver<Quote>,
    timeout: Duration,
}

impl ChannelQuoteSource {
    /// Wrap `rx`, waiting at most `timeout` per fetch.
    pub fn new(rx: Receiver<Quote>, timeout: Duration) -> Self {
        Self { rx, timeout }
    }
}

impl QuoteSource for ChannelQuoteSource {
    /// Waits up to the timeout for one quote, then skips past anything queued behind it.
    fn current_quote(&mut self) -> Result<Quote> {
        let first = self.rx.recv_timeout(self.timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => {
                QuoteError::ConnectionFailure(format!("no quote within {:?}", self.timeout))
            }
            RecvTimeoutError::Disconnected => {
                QuoteError::ConnectionFailure("quote feed disconnected".to_string())
            }
        })?;
        Ok(self.rx.try_iter().last().unwrap_or(first))
    }
}
