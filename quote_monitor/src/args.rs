//! Command-line arguments for the quote monitor.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker to monitor (one to five uppercase letters).
    #[clap(long)]
    pub symbol: String,

    /// Number of refreshes before exiting; 0 runs until Ctrl+C.
    #[clap(long, default_value_t = 10)]
    pub ticks: u64,

    /// Interval between simulated feed updates, in milliseconds.
    #[clap(long, default_value_t = 500)]
    pub interval_ms: u64,

    /// Previous session close the simulated price starts from.
    #[clap(long, default_value_t = 100.0)]
    pub initial_price: f64,

    /// How long a refresh waits for the feed before reporting a connection failure.
    #[clap(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Probability in `[0, 1]` that the simulated feed skips an update.
    #[clap(long, default_value_t = 0.0, value_parser = parse_probability)]
    pub drop_rate: f64,
}

/// Accept only finite values in `[0, 1]`.
fn parse_probability(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{raw:?} is not a number: {e}"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{raw} is not a probability in [0, 1]"));
    }
    Ok(value)
}
