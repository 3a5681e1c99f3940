//! Two-slot snapshot history.
//!
//! Only the latest snapshot and the one before it are kept. Every successful fetch
//! moves the history one step along
//! `NoData -> OneSnapshot -> TwoSnapshots -> TwoSnapshots`, dropping the oldest
//! snapshot once both slots are full. Because the slots live inside a single enum,
//! a previous snapshot can never exist without a current one.
use quote_common::Quote;
use strum_macros::Display;

/// Which slots are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HistoryState {
    /// No successful refresh yet.
    NoData,
    /// Only a current snapshot.
    OneSnapshot,
    /// Current and previous snapshots.
    TwoSnapshots,
}

/// Current and previous snapshot, updated as a pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QuoteHistory {
    /// Nothing fetched yet.
    #[default]
    NoData,
    /// The first snapshot.
    OneSnapshot(Quote),
    /// The latest snapshot and the one it replaced.
    TwoSnapshots {
        /// Latest snapshot.
        current: Quote,
        /// Snapshot it replaced.
        previous: Quote,
    },
}

impl QuoteHistory {
    /// Record a freshly fetched snapshot, promoting the current one to previous.
    pub fn push(&mut self, quote: Quote) {
        *self = match std::mem::take(self) {
            QuoteHistory::NoData => QuoteHistory::OneSnapshot(quote),
            QuoteHistory::OneSnapshot(current)
            | QuoteHistory::TwoSnapshots { current, .. } => QuoteHistory::TwoSnapshots {
                current: quote,
                previous: current,
            },
        };
    }

    /// Latest snapshot, if any.
    pub fn current(&self) -> Option<&Quote> {
        match self {
            QuoteHistory::NoData => None,
            QuoteHistory::OneSnapshot(current) | QuoteHistory::TwoSnapshots { current, .. } => {
                Some(current)
            }
        }
    }

    /// Snapshot fetched just before the current one.
    pub fn previous(&self) -> Option<&Quote> {
        match self {
            QuoteHistory::TwoSnapshots { previous, .. } => Some(previous),
            _ => None,
        }
    }

    /// Tag describing which slots are populated.
    pub fn state(&self) -> HistoryState {
        match self {
            QuoteHistory::NoData => HistoryState::NoData,
            QuoteHistory::OneSnapshot(_) => HistoryState::OneSnapshot,
            QuoteHistory::TwoSnapshots { .. } => HistoryState::TwoSnapshots,
        }
    }
}
