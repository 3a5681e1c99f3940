//! Quote snapshot and JSON encoding helper.
//!
//! A `Quote` is one read-only snapshot of the market for a symbol: the last traded
//! price, the prior session's close and the signed session change. Whoever builds it
//! owns it; consumers only read the fields.
use serde::{Deserialize, Serialize};

use crate::result::Result;

/// Market snapshot for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    symbol: String,
    last_trade_price: f64,
    previous_close: f64,
    change_today: f64,
}

impl Quote {
    /// Creates a snapshot. The symbol is not re-validated here.
    pub fn new(
        symbol: impl Into<String>,
        last_trade_price: f64,
        previous_close: f64,
        change_today: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            last_trade_price,
            previous_close,
            change_today,
        }
    }

    /// Symbol identifier.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Current traded price.
    pub fn last_trade_price(&self) -> f64 {
        self.last_trade_price
    }

    /// Prior session's closing price.
    pub fn previous_close(&self) -> f64 {
        self.previous_close
    }

    /// Signed price movement during the current session.
    pub fn change_today(&self) -> f64 {
        self.change_today
    }

    /// Encode the quote to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}
