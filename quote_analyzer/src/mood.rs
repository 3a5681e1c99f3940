//! Cue selection for the latest snapshot.
use quote_common::{Cue, Quote};

/// Map the latest snapshot to a cue.
///
/// No snapshot yields [`Cue::Error`]. A positive session change yields
/// [`Cue::Happy`]; anything else, including a flat session, yields [`Cue::Sad`].
pub fn select_cue(current: Option<&Quote>) -> Cue {
    match current {
        None => Cue::Error,
        Some(quote) if quote.change_today() > 0.0 => Cue::Happy,
        Some(_) => Cue::Sad,
    }
}
