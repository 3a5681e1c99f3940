//! Simulated quote feed.
//!
//! `SimulatedFeed` runs a background thread that random-walks a price for one symbol
//! and publishes a `Quote` on a `crossbeam_channel` every interval. The previous
//! close stays fixed at the starting price so the session change is simply the
//! distance from it. A configurable share of updates is skipped to simulate an
//! unreliable feed.
use crossbeam_channel::{Receiver, unbounded};
use log::{debug, info};
use quote_common::Quote;
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Parameters for the simulated feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Symbol stamped on every quote.
    pub symbol: String,
    /// Starting price, also used as the previous close.
    pub initial_price: f64,
    /// Pause between updates.
    pub interval: Duration,
    /// Probability of skipping an update.
    pub drop_rate: f64,
}

/// Background market data generator for a single symbol.
pub struct SimulatedFeed;

impl SimulatedFeed {
    /// Start the generator thread and return the receiving end of its quote channel.
    ///
    /// The thread stops once `shutdown` is set or the receiver is dropped.
    pub fn start(config: FeedConfig, shutdown: Arc<AtomicBool>) -> Receiver<Quote> {
        let (quote_tx, quote_rx) = unbounded::<Quote>();
        let drop_rate = if config.drop_rate.is_nan() {
            0.0
        } else {
            config.drop_rate.clamp(0.0, 1.0)
        };

        thread::spawn(move || {
            let mut rng = rand::rng();
            let previous_close = config.initial_price;
            let mut price = previous_close;
            info!(
                "Simulated feed for {} started at {:.2}",
                config.symbol, previous_close
            );

            while !shutdown.load(Ordering::Relaxed) {
                thread::sleep(config.interval);
                price = next_price(&mut rng, price);

                if rng.random_bool(drop_rate) {
                    debug!("Feed skipped an update for {}", config.symbol);
                    continue;
                }

                let quote = Quote::new(
                    config.symbol.as_str(),
                    price,
                    previous_close,
                    price - previous_close,
                );
                if quote_tx.send(quote).is_err() {
                    break;
                }
            }
            info!("Simulated feed for {} stopping...", config.symbol);
        });
        quote_rx
    }
}

/// Calculate the next synthetic price using a small random walk around `current_price`.
///
/// The change is sampled uniformly from `[-1%, +1%)` and the result is clamped to a
/// minimum positive value.
pub fn next_price(rng: &mut impl Rng, current_price: f64) -> f64 {
    let change: f64 = rng.random_range(-0.01..0.01);
    let new_price = current_price * (1.0 + change);
    new_price.max(0.01)
}
