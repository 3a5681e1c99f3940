//! Quote analyzer for one validated symbol.
//!
//! `QuoteAnalyzer` owns its collaborators, pulls a snapshot from the quote source on
//! every `refresh`, and answers metric queries from the two most recent snapshots.
//! Queries that need more snapshots than are available fail with
//! `QuoteError::InvalidAnalysisState`; feed failures are returned to the caller
//! unchanged and leave the history untouched.
use log::debug;
use quote_common::{AudioSignal, Cue, Quote, QuoteError, QuoteSource, Result, Symbol};

use crate::history::{HistoryState, QuoteHistory};
use crate::mood::select_cue;

/// Tracks one symbol's quotes and derives metrics from them.
pub struct QuoteAnalyzer {
    symbol: Symbol,
    quote_source: Box<dyn QuoteSource>,
    audio_signal: Box<dyn AudioSignal>,
    history: QuoteHistory,
}

impl QuoteAnalyzer {
    /// Create an analyzer for `symbol`. Does not contact the quote source.
    pub fn new(
        symbol: &str,
        quote_source: impl QuoteSource + 'static,
        audio_signal: impl AudioSignal + 'static,
    ) -> Result<Self> {
        Ok(Self {
            symbol: Symbol::parse(symbol)?,
            quote_source: Box::new(quote_source),
            audio_signal: Box::new(audio_signal),
            history: QuoteHistory::default(),
        })
    }

    /// Start a builder that reports missing arguments as `QuoteError::NullReference`.
    pub fn builder() -> QuoteAnalyzerBuilder {
        QuoteAnalyzerBuilder::default()
    }

    /// Fetch one snapshot and shift the history.
    pub fn refresh(&mut self) -> Result<()> {
        let quote = self.quote_source.current_quote()?;
        debug!(
            "{}: refreshed, last trade {:.2}, change today {:.2}",
            self.symbol,
            quote.last_trade_price(),
            quote.change_today()
        );
        self.history.push(quote);
        Ok(())
    }

    /// The validated symbol, exactly as supplied.
    pub fn symbol(&self) -> &str {
        self.symbol.as_str()
    }

    /// Last traded price of the current snapshot.
    pub fn current_price(&self) -> Result<f64> {
        Ok(self.require_current()?.last_trade_price())
    }

    /// Prior session's close from the current snapshot.
    pub fn previous_close(&self) -> Result<f64> {
        Ok(self.require_current()?.previous_close())
    }

    /// `change_today - previous_close` of the current snapshot.
    pub fn change_since_close(&self) -> Result<f64> {
        let quote = self.require_current()?;
        Ok(quote.change_today() - quote.previous_close())
    }

    /// `change_today / previous_close * 100` of the current snapshot.
    ///
    /// A zero previous close has no meaningful percentage and is reported as
    /// `InvalidAnalysisState` rather than an infinite or NaN value.
    pub fn percent_change_since_close(&self) -> Result<f64> {
        let quote = self.require_current()?;
        if quote.previous_close() == 0.0 {
            return Err(QuoteError::InvalidAnalysisState(format!(
                "{}: previous close is zero",
                self.symbol
            )));
        }
        Ok(quote.change_today() / quote.previous_close() * 100.0)
    }

    /// Difference in last traded price between the two most recent refreshes.
    pub fn change_since_last_check(&self) -> Result<f64> {
        match (self.history.current(), self.history.previous()) {
            (Some(current), Some(previous)) => {
                Ok(current.last_trade_price() - previous.last_trade_price())
            }
            _ => Err(QuoteError::InvalidAnalysisState(format!(
                "{}: two refreshes required, history is {}",
                self.symbol,
                self.history.state()
            ))),
        }
    }

    /// Play the cue matching the current snapshot and return it.
    ///
    /// Without a snapshot the error cue is played; this never fails.
    pub fn play_appropriate_audio(&self) -> Cue {
        let cue = select_cue(self.history.current());
        debug!("{}: playing {} cue", self.symbol, cue);
        self.audio_signal.play(cue);
        cue
    }

    /// Latest snapshot, if any refresh has succeeded.
    pub fn current_quote(&self) -> Option<&Quote> {
        self.history.current()
    }

    /// Snapshot replaced by the latest refresh.
    pub fn previous_quote(&self) -> Option<&Quote> {
        self.history.previous()
    }

    /// Which history slots are populated.
    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    fn require_current(&self) -> Result<&Quote> {
        self.history.current().ok_or_else(|| {
            QuoteError::InvalidAnalysisState(format!("{}: no quote loaded yet", self.symbol))
        })
    }
}

/// Builder for [`QuoteAnalyzer`] where every argument may be absent.
#[derive(Default)]
pub struct QuoteAnalyzerBuilder {
    symbol: Option<String>,
    quote_source: Option<Box<dyn QuoteSource>>,
    audio_signal: Option<Box<dyn AudioSignal>>,
}

impl QuoteAnalyzerBuilder {
    /// Ticker to analyze; validated in `build`.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Where `refresh` fetches snapshots from.
    pub fn quote_source(mut self, quote_source: impl QuoteSource + 'static) -> Self {
        self.quote_source = Some(Box::new(quote_source));
        self
    }

    /// Player for the mood cues.
    pub fn audio_signal(mut self, audio_signal: impl AudioSignal + 'static) -> Self {
        self.audio_signal = Some(Box::new(audio_signal));
        self
    }

    /// Checks presence of symbol, quote source and audio signal (in that order),
    /// then validates the symbol.
    pub fn build(self) -> Result<QuoteAnalyzer> {
        let symbol = self.symbol.ok_or(QuoteError::NullReference("symbol"))?;
        let quote_source = self
            .quote_source
            .ok_or(QuoteError::NullReference("quote source"))?;
        let audio_signal = self
            .audio_signal
            .ok_or(QuoteError::NullReference("audio signal"))?;

        Ok(QuoteAnalyzer {
            symbol: Symbol::parse(&symbol)?,
            quote_source,
            audio_signal,
            history: QuoteHistory::default(),
        })
    }
}
