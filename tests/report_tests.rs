//! Reporting surface integration tests.
//!
//! Renderers consume `FrameReport`s or the rendered per-frame strings.

use rust_bowling::core::{FrameNo, SheetConfig};
use rust_bowling::frames::{ThrowKind, ThrowOutcome};
use rust_bowling::scoring::{FrameReport, FrameTotal, ScoreEngine};

/// Rendered states for a game with every kind of frame.
#[test]
fn test_reported_states() {
    let engine = ScoreEngine::from_throws([10, 7, 3, 9, 0, 0, 0, 4]).unwrap();

    assert_eq!(engine.reported_state(1).unwrap(), "X");
    assert_eq!(engine.reported_state(2).unwrap(), "7|/");
    assert_eq!(engine.reported_state(3).unwrap(), "9|-");
    assert_eq!(engine.reported_state(4).unwrap(), "-|-");
    assert_eq!(engine.reported_state(5).unwrap(), "4");
}

/// A frame that exists but has no throws renders as the empty string.
#[test]
fn test_unstarted_frame_renders_empty() {
    let engine = ScoreEngine::from_throws([10]).unwrap();
    assert_eq!(engine.reported_state(2).unwrap(), "");
}

/// Custom symbols flow through the engine's config.
#[test]
fn test_custom_sheet_config() {
    let config = SheetConfig::new()
        .with_strike('S')
        .with_spare('P')
        .with_miss('0')
        .with_separator(' ');
    let mut engine = ScoreEngine::with_config(config);
    for pins in [10, 0, 10, 5, 0] {
        engine.receive_throw(pins).unwrap();
    }

    assert_eq!(engine.reported_state(1).unwrap(), "S");
    assert_eq!(engine.reported_state(2).unwrap(), "0 P");
    assert_eq!(engine.reported_state(3).unwrap(), "5 0");
}

/// Reports carry per-throw values, classifications and totals.
#[test]
fn test_frame_report_fields() {
    let engine = ScoreEngine::from_throws([6, 4, 3]).unwrap();

    let report = engine.frame_report(1).unwrap();
    assert_eq!(report.ordinal, FrameNo::FIRST);
    assert_eq!(report.outcome, ThrowOutcome::Spare);
    assert_eq!(report.total, FrameTotal::Resolved(13));
    let kinds: Vec<_> = report.throws.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ThrowKind::Open, ThrowKind::Spare]);

    let report = engine.frame_report(2).unwrap();
    assert_eq!(report.outcome, ThrowOutcome::InProgress);
    assert_eq!(report.total, FrameTotal::Pending);
}

/// `reports` covers every started frame in order.
#[test]
fn test_reports_cover_started_frames() {
    let engine = ScoreEngine::from_throws([10; 12]).unwrap();
    let reports = engine.reports();
    assert_eq!(reports.len(), 10);
    assert_eq!(reports[9].total, FrameTotal::Resolved(300));
    assert!(reports.iter().all(|r| r.outcome == ThrowOutcome::Strike));
}

/// Reports serialize for hosts that ship them elsewhere.
#[test]
fn test_report_serialization() {
    let engine = ScoreEngine::from_throws([8, 2, 5]).unwrap();
    let report = engine.frame_report(1).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let deserialized: FrameReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, deserialized);
}
