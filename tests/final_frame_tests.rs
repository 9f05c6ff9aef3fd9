//! Final (10th) frame integration tests.
//!
//! Frame 10 takes two throws, plus a third after a strike or spare. These
//! tests drive it through the engine so the chain, the rack rules and the
//! end-of-game handling are exercised together.

use rust_bowling::core::{PinCount, ScoreError};
use rust_bowling::frames::{FinalState, Frame, ThrowOutcome};
use rust_bowling::scoring::{FrameTotal, ScoreEngine};

/// Nine frames of gutter balls, ready for frame 10.
fn at_tenth() -> ScoreEngine {
    ScoreEngine::from_throws([0; 18]).unwrap()
}

fn tenth(engine: &ScoreEngine) -> FinalState {
    match engine.frame(10).unwrap() {
        Frame::Final(frame) => frame.state(),
        Frame::Normal(_) => panic!("frame 10 should be a final frame"),
    }
}

// =============================================================================
// Throw Limits
// =============================================================================

/// Frame 9 completing creates the final frame.
#[test]
fn test_final_frame_created_after_ninth() {
    let engine = at_tenth();
    assert_eq!(tenth(&engine), FinalState::AwaitingFirst);
    assert_eq!(engine.frame(9).unwrap().next(), Some(rust_bowling::FrameNo::LAST));
    assert_eq!(engine.frame(10).unwrap().next(), None);
}

/// An open 10th frame ends the game after two throws.
#[test]
fn test_open_tenth_ends_after_two() {
    let mut engine = at_tenth();
    engine.receive_throw(4).unwrap();
    engine.receive_throw(5).unwrap();

    assert!(engine.is_game_complete());
    assert_eq!(engine.current_frame(), None);
    assert_eq!(engine.pins_standing(), None);
    assert_eq!(engine.receive_throw(1), Err(ScoreError::GameAlreadyComplete));
    assert_eq!(engine.final_score(), Some(9));
}

/// A spare in frame 10 earns one bonus throw on a fresh rack.
#[test]
fn test_spare_earns_third_throw() {
    let mut engine = at_tenth();
    engine.receive_throw(3).unwrap();
    engine.receive_throw(7).unwrap();

    assert!(!engine.is_game_complete());
    assert_eq!(engine.pins_standing(), Some(PinCount::ALL));
    assert_eq!(engine.total_after(10), Ok(FrameTotal::Pending));

    engine.receive_throw(10).unwrap();
    assert!(engine.is_game_complete());
    assert_eq!(engine.final_score(), Some(20));
    assert_eq!(engine.frame(10).unwrap().outcome(), ThrowOutcome::Spare);
}

/// A strike in frame 10 earns two more throws.
#[test]
fn test_strike_earns_two_more() {
    let mut engine = at_tenth();
    engine.receive_throw(10).unwrap();
    assert_eq!(tenth(&engine), FinalState::AwaitingSecond { first: PinCount::ALL });
    assert_eq!(engine.pins_standing(), Some(PinCount::ALL));

    engine.receive_throw(10).unwrap();
    engine.receive_throw(10).unwrap();
    assert_eq!(engine.final_score(), Some(30));
}

// =============================================================================
// Rack Rules
// =============================================================================

/// Without a first-ball strike, the first two throws share one rack.
#[test]
fn test_second_throw_sum_constraint() {
    let mut engine = at_tenth();
    engine.receive_throw(8).unwrap();
    assert_eq!(
        engine.receive_throw(3),
        Err(ScoreError::PinSumExceedsTen { first: 8, second: 3 })
    );
}

/// After a strike the second throw is on a fresh rack, so 10 + 9 is fine.
#[test]
fn test_second_throw_after_strike_is_independent() {
    let mut engine = at_tenth();
    engine.receive_throw(10).unwrap();
    engine.receive_throw(9).unwrap();
    assert_eq!(engine.pins_standing(), PinCount::new(1).ok());
}

/// After strike then non-strike, the bonus throw faces the leftover pins.
#[test]
fn test_bonus_after_strike_then_open() {
    let mut engine = at_tenth();
    engine.receive_throw(10).unwrap();
    engine.receive_throw(6).unwrap();
    assert_eq!(
        engine.receive_throw(5),
        Err(ScoreError::PinSumExceedsTen { first: 6, second: 5 })
    );
    engine.receive_throw(4).unwrap();
    assert_eq!(engine.final_score(), Some(20));
    assert_eq!(engine.reported_state(10).unwrap(), "X|6|/");
}

/// A gutter then a full rack is a spare, not a strike.
#[test]
fn test_gutter_then_ten_is_spare() {
    let mut engine = at_tenth();
    engine.receive_throw(0).unwrap();
    engine.receive_throw(10).unwrap();
    engine.receive_throw(10).unwrap();
    assert_eq!(engine.frame(10).unwrap().outcome(), ThrowOutcome::Spare);
    assert_eq!(engine.reported_state(10).unwrap(), "-|/|X");
    assert_eq!(engine.final_score(), Some(20));
}
