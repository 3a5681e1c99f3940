//! Quote Monitor — drives a `QuoteAnalyzer` against a simulated quote feed and logs
//! the derived metrics and audio cues after every refresh.
//!
//! Usage example (CLI):
//! ```bash
//! quote_monitor --symbol GOOG --ticks 20 --interval-ms 250 --drop-rate 0.2
//! ```
//!
//! Wiring:
//! - `SimulatedFeed` — background thread publishing random-walk quotes over a
//!   `crossbeam_channel`.
//! - `ChannelQuoteSource` — the analyzer's `QuoteSource`; a missed update within the
//!   timeout surfaces as a connection failure.
//! - `LogSpeaker` — the analyzer's `AudioSignal`; cues are written to the log.
//!
//! A failed refresh is logged and the next tick simply tries again; the analyzer
//! itself never retries.
#![warn(missing_docs)]
mod args;
mod channel_source;
mod feed;
mod speaker;

use crate::args::Args;
use crate::channel_source::ChannelQuoteSource;
use crate::feed::{FeedConfig, SimulatedFeed};
use crate::speaker::LogSpeaker;
use clap::Parser;
use log::{debug, error, info, warn};
use quote_analyzer::QuoteAnalyzer;
use quote_common::{QuoteError, Result, Symbol};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down monitor...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| QuoteError::Signal(e.to_string()))?;
    }

    let (symbol, config) = feed_config(&args)?;
    let quote_rx = SimulatedFeed::start(config, shutdown.clone());
    let source = ChannelQuoteSource::new(quote_rx, Duration::from_millis(args.timeout_ms));

    let mut analyzer = QuoteAnalyzer::new(symbol.as_str(), source, LogSpeaker)?;
    info!("Monitoring {}. Press Ctrl+C to exit.", analyzer.symbol());

    let mut tick: u64 = 0;
    while !shutdown.load(Ordering::Relaxed) && (args.ticks == 0 || tick < args.ticks) {
        tick += 1;
        match analyzer.refresh() {
            Ok(()) => report(&analyzer)?,
            Err(QuoteError::ConnectionFailure(reason)) => {
                warn!("Tick {}: refresh failed: {}", tick, reason);
            }
            Err(e) => {
                error!("Tick {}: unexpected error: {}", tick, e);
                return Err(e);
            }
        }
        let cue = analyzer.play_appropriate_audio();
        debug!("Tick {}: cue {}", tick, cue);
    }

    shutdown.store(true, Ordering::SeqCst);
    info!("Monitor stopping after {} ticks", tick);
    Ok(())
}

/// Validate the requested symbol and derive the feed settings from `args`.
///
/// Runs before any thread is spawned so a bad symbol never starts a feed.
fn feed_config(args: &Args) -> Result<(Symbol, FeedConfig)> {
    let symbol = Symbol::parse(&args.symbol)?;
    let config = FeedConfig {
        symbol: symbol.to_string(),
        initial_price: args.initial_price,
        interval: Duration::from_millis(args.interval_ms),
        drop_rate: args.drop_rate,
    };
    Ok((symbol, config))
}

/// Log the metrics available for the analyzer's current history.
fn report(analyzer: &QuoteAnalyzer) -> Result<()> {
    if let Some(quote) = analyzer.current_quote() {
        debug!("Quote: {}", quote.to_json()?);
    }

    let percent = match analyzer.percent_change_since_close() {
        Ok(percent) => format!("{:+.2}%", percent),
        Err(QuoteError::InvalidAnalysisState(_)) => "n/a".to_string(),
        Err(e) => return Err(e),
    };
    let since_last = match analyzer.change_since_last_check() {
        Ok(change) => format!("{:+.2}", change),
        Err(QuoteError::InvalidAnalysisState(_)) => "n/a".to_string(),
        Err(e) => return Err(e),
    };

    info!(
        "{} Price={:.2} Close={:.2} SinceClose={:+.2} Percent={} SinceLastCheck={}",
        analyzer.symbol(),
        analyzer.current_price()?,
        analyzer.previous_close()?,
        analyzer.change_since_close()?,
        percent,
        since_last
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
