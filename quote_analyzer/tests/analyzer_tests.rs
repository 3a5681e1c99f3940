use proptest::prelude::*;
use quote_analyzer::{HistoryState, QuoteAnalyzer};
use quote_common::{Cue, Quote, QuoteError};

use mock_collaborators::{CountingAudio, CueCounts, ScriptedSource};

const EPSILON: f64 = 0.001;

fn analyzer_for(symbol: &str, source: &ScriptedSource, audio: &CountingAudio) -> QuoteAnalyzer {
    QuoteAnalyzer::new(symbol, source.clone(), audio.clone()).expect("valid symbol")
}

fn assert_invalid_state<T: std::fmt::Debug>(result: quote_common::Result<T>) {
    assert!(
        matches!(result, Err(QuoteError::InvalidAnalysisState(_))),
        "expected InvalidAnalysisState, got {result:?}"
    );
}

#[test]
fn construction_accepts_known_tickers_without_fetching() {
    let source = ScriptedSource::new();
    let audio = CountingAudio::new();

    for symbol in ["GOOG", "AAPL"] {
        let analyzer = analyzer_for(symbol, &source, &audio);
        assert_eq!(analyzer.symbol(), symbol);
        assert_eq!(analyzer.history_state(), HistoryState::NoData);
    }
    assert_eq!(source.calls(), 0);
}

#[test]
fn construction_rejects_malformed_symbol() {
    let result = QuoteAnalyzer::new("ZZZZZZZZZ", ScriptedSource::new(), CountingAudio::new());
    assert!(matches!(result, Err(QuoteError::InvalidSymbol(_))));
}

#[test]
fn builder_reports_missing_symbol() {
    let result = QuoteAnalyzer::builder()
        .quote_source(ScriptedSource::new())
        .audio_signal(CountingAudio::new())
        .build();
    assert!(matches!(result, Err(QuoteError::NullReference("symbol"))));
}

#[test]
fn builder_reports_missing_quote_source() {
    let result = QuoteAnalyzer::builder()
        .symbol("GOOG")
        .audio_signal(CountingAudio::new())
        .build();
    assert!(matches!(result, Err(QuoteError::NullReference("quote source"))));
}

#[test]
fn builder_reports_missing_audio_signal() {
    let result = QuoteAnalyzer::builder()
        .symbol("GOOG")
        .quote_source(ScriptedSource::new())
        .build();
    assert!(matches!(result, Err(QuoteError::NullReference("audio signal"))));
}

#[test]
fn builder_validates_symbol_after_presence() {
    let result = QuoteAnalyzer::builder()
        .symbol("ZZZZZZZZZ")
        .quote_source(ScriptedSource::new())
        .audio_signal(CountingAudio::new())
        .build();
    assert!(matches!(result, Err(QuoteError::InvalidSymbol(_))));

    let analyzer = QuoteAnalyzer::builder()
        .symbol("AAPL")
        .quote_source(ScriptedSource::new())
        .audio_signal(CountingAudio::new())
        .build()
        .expect("complete builder");
    assert_eq!(analyzer.symbol(), "AAPL");
}

#[test]
fn symbol_is_stable_across_calls() {
    let source = ScriptedSource::returning(Quote::new("AAPL", 3.0, 10.0, 5.0));
    let mut analyzer = analyzer_for("AAPL", &source, &CountingAudio::new());

    assert_eq!(analyzer.symbol(), "AAPL");
    assert_eq!(analyzer.symbol(), "AAPL");
    analyzer.refresh().unwrap();
    assert_eq!(analyzer.symbol(), "AAPL");
}

#[test]
fn every_metric_needs_a_refresh_first() {
    let analyzer = analyzer_for("AAPL", &ScriptedSource::new(), &CountingAudio::new());

    assert_invalid_state(analyzer.current_price());
    assert_invalid_state(analyzer.previous_close());
    assert_invalid_state(analyzer.change_since_close());
    assert_invalid_state(analyzer.percent_change_since_close());
    assert_invalid_state(analyzer.change_since_last_check());
}

#[test]
fn metrics_after_one_refresh() {
    let source = ScriptedSource::returning(Quote::new("AAPL", 3.0, 10.0, 5.0));
    let mut analyzer = analyzer_for("AAPL", &source, &CountingAudio::new());
    analyzer.refresh().unwrap();

    assert!((analyzer.current_price().unwrap() - 3.0).abs() < EPSILON);
    assert!((analyzer.previous_close().unwrap() - 10.0).abs() < EPSILON);
    assert!((analyzer.change_since_close().unwrap() - (5.0 - 10.0)).abs() < EPSILON);
    assert!((analyzer.percent_change_since_close().unwrap() - 50.0).abs() < 0.01);
    assert_invalid_state(analyzer.change_since_last_check());
}

#[test]
fn uniform_quote_yields_zero_change_and_full_percent() {
    let source = ScriptedSource::returning(Quote::new("GOOG", 5.0, 5.0, 5.0));
    let audio = CountingAudio::new();
    let mut analyzer = analyzer_for("GOOG", &source, &audio);
    analyzer.refresh().unwrap();

    assert_eq!(analyzer.current_price().unwrap(), 5.0);
    assert_eq!(analyzer.previous_close().unwrap(), 5.0);
    assert_eq!(analyzer.change_since_close().unwrap(), 0.0);
    assert!((analyzer.percent_change_since_close().unwrap() - 100.0).abs() < 0.01);

    assert_eq!(analyzer.play_appropriate_audio(), Cue::Happy);
    assert_eq!(
        audio.counts(),
        CueCounts { happy: 1, sad: 0, error: 0 }
    );
}

#[test]
fn zero_previous_close_has_no_percentage() {
    let source = ScriptedSource::returning(Quote::new("GOOG", 5.0, 0.0, 1.0));
    let mut analyzer = analyzer_for("GOOG", &source, &CountingAudio::new());
    analyzer.refresh().unwrap();

    assert_invalid_state(analyzer.percent_change_since_close());
    assert_eq!(analyzer.change_since_close().unwrap(), 1.0);
}

#[test]
fn falling_session_plays_sad_music() {
    let source = ScriptedSource::returning(Quote::new("GOOG", 5.0, 5.0, -4.0));
    let audio = CountingAudio::new();
    let mut analyzer = analyzer_for("GOOG", &source, &audio);
    analyzer.refresh().unwrap();

    assert_eq!(analyzer.play_appropriate_audio(), Cue::Sad);
    assert_eq!(
        audio.counts(),
        CueCounts { happy: 0, sad: 1, error: 0 }
    );
}

#[test]
fn flat_session_plays_sad_music() {
    let source = ScriptedSource::returning(Quote::new("GOOG", 5.0, 5.0, 0.0));
    let audio = CountingAudio::new();
    let mut analyzer = analyzer_for("GOOG", &source, &audio);
    analyzer.refresh().unwrap();

    assert_eq!(analyzer.play_appropriate_audio(), Cue::Sad);
    assert_eq!(audio.counts().sad, 1);
}

#[test]
fn no_data_plays_error_music_without_fetching() {
    let source = ScriptedSource::returning(Quote::new("GOOG", 5.0, 5.0, -4.0));
    let audio = CountingAudio::new();
    let analyzer = analyzer_for("GOOG", &source, &audio);

    assert_eq!(analyzer.play_appropriate_audio(), Cue::Error);
    assert_eq!(
        audio.counts(),
        CueCounts { happy: 0, sad: 0, error: 1 }
    );
    assert_eq!(source.calls(), 0);
}

#[test]
fn change_since_last_check_compares_two_refreshes() {
    let source = ScriptedSource::returning(Quote::new("AAPL", 3.0, 10.0, 5.0));
    let mut analyzer = analyzer_for("AAPL", &source, &CountingAudio::new());
    analyzer.refresh().unwrap();

    source.respond_with(Quote::new("AAPL", 4.0, 11.0, 6.0));
    analyzer.refresh().unwrap();

    assert_eq!(analyzer.history_state(), HistoryState::TwoSnapshots);
    assert!((analyzer.change_since_last_check().unwrap() - 1.0).abs() < 0.01);
}

#[test]
fn third_refresh_drops_the_oldest_snapshot() {
    let source = ScriptedSource::returning(Quote::new("AAPL", 3.0, 10.0, 5.0));
    let mut analyzer = analyzer_for("AAPL", &source, &CountingAudio::new());
    analyzer.refresh().unwrap();
    source.respond_with(Quote::new("AAPL", 4.0, 10.0, 5.0));
    analyzer.refresh().unwrap();
    source.respond_with(Quote::new("AAPL", 2.5, 10.0, 5.0));
    analyzer.refresh().unwrap();

    assert_eq!(analyzer.history_state(), HistoryState::TwoSnapshots);
    assert_eq!(analyzer.previous_quote().map(Quote::last_trade_price), Some(4.0));
    assert!((analyzer.change_since_last_check().unwrap() + 1.5).abs() < EPSILON);
    assert_eq!(source.calls(), 3);
}

#[test]
fn connection_failure_propagates_and_keeps_history() {
    let source = ScriptedSource::new();
    source.fail_with("Unable to connect with Stock Ticker Source.");
    let mut analyzer = analyzer_for("GOOG", &source, &CountingAudio::new());

    let err = analyzer.refresh().expect_err("feed is down");
    assert!(matches!(err, QuoteError::ConnectionFailure(_)));
    assert_eq!(analyzer.history_state(), HistoryState::NoData);

    source.respond_with(Quote::new("GOOG", 7.0, 6.0, 1.0));
    analyzer.refresh().unwrap();
    let before = analyzer.current_quote().cloned();

    source.fail_with("timeout");
    assert!(matches!(
        analyzer.refresh(),
        Err(QuoteError::ConnectionFailure(reason)) if reason == "timeout"
    ));
    assert_eq!(analyzer.history_state(), HistoryState::OneSnapshot);
    assert_eq!(analyzer.current_quote().cloned(), before);
    assert!(analyzer.previous_quote().is_none());
    assert_eq!(source.calls(), 3);
}

proptest! {
    #[test]
    fn analyzer_keeps_any_valid_symbol_verbatim(s in "[A-Z]{1,5}") {
        let analyzer = QuoteAnalyzer::new(&s, ScriptedSource::new(), CountingAudio::new()).unwrap();
        prop_assert_eq!(analyzer.symbol(), s.as_str());
        prop_assert_eq!(analyzer.history_state(), HistoryState::NoData);
    }

    #[test]
    fn analyzer_rejects_oversized_symbols(s in "[A-Z]{6,12}") {
        let result = QuoteAnalyzer::new(&s, ScriptedSource::new(), CountingAudio::new());
        prop_assert!(matches!(result, Err(QuoteError::InvalidSymbol(_))));
    }
}
