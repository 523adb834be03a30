//! End-to-end scenarios through the protocol front end
//!
//! Each test feeds a command script into a fresh engine and compares the
//! full text output, so admission, crossing, lifecycle operations and
//! rendering are exercised together.

use std::io::Cursor;

use matching_engine::engine::MatchingEngine;
use matching_engine::protocol::MessageProcessor;

fn run_session(script: &str) -> String {
    let mut processor = MessageProcessor::new(MatchingEngine::new());
    let mut output = Vec::new();
    processor
        .run(Cursor::new(script), &mut output)
        .expect("session failed");
    String::from_utf8(output).expect("non-utf8 output")
}

#[test]
fn full_cross_clears_book() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         SELL GFD 1000 10 id2\n\
         PRINT\n",
    );
    assert_eq!(output, "TRADE id1 1000 10 id2 1000 10\nSELL:\nBUY:\n");
}

#[test]
fn price_time_priority_within_level() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         BUY GFD 1000 10 id2\n\
         SELL GFD 1000 15 id3\n\
         PRINT\n",
    );
    assert_eq!(
        output,
        "TRADE id1 1000 10 id3 1000 10\n\
         TRADE id2 1000 5 id3 1000 5\n\
         SELL:\n\
         BUY:\n\
         1000 5\n"
    );
}

#[test]
fn better_priced_levels_match_first() {
    let output = run_session(
        "SELL GFD 1010 5 s1\n\
         SELL GFD 1000 5 s2\n\
         BUY GFD 1010 10 b1\n",
    );
    assert_eq!(
        output,
        "TRADE s2 1000 5 b1 1010 5\n\
         TRADE s1 1010 5 b1 1010 5\n"
    );
}

#[test]
fn buy_scan_stops_at_first_non_crossing_level() {
    // The 1050 ask does not cross; the remainder rests instead of walking
    // deeper levels.
    let output = run_session(
        "SELL GFD 1000 5 s1\n\
         SELL GFD 1050 5 s2\n\
         BUY GFD 1020 10 b1\n\
         PRINT\n",
    );
    assert_eq!(
        output,
        "TRADE s1 1000 5 b1 1020 5\n\
         SELL:\n\
         1050 5\n\
         BUY:\n\
         1020 5\n"
    );
}

#[test]
fn ioc_remainder_never_rests() {
    let output = run_session(
        "SELL IOC 10 100 idX\n\
         PRINT\n\
         BUY GFD 10 30 b1\n\
         SELL IOC 10 100 idY\n\
         PRINT\n",
    );
    assert_eq!(
        output,
        "SELL:\n\
         BUY:\n\
         TRADE b1 10 30 idY 10 30\n\
         SELL:\n\
         BUY:\n"
    );
}

#[test]
fn cancel_removes_matchability() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         CANCEL id1\n\
         CANCEL id1\n\
         SELL GFD 1000 10 id2\n\
         PRINT\n",
    );
    // No trade; the sell rests instead
    assert_eq!(output, "SELL:\n1000 10\nBUY:\n");
}

#[test]
fn modify_relocates_without_matching() {
    let output = run_session(
        "SELL GFD 1500 7 s1\n\
         BUY GFD 1000 5 id1\n\
         MODIFY id1 BUY 2000 5\n\
         PRINT\n",
    );
    // 2000 crosses the 1500 ask, but modify never matches
    assert_eq!(output, "SELL:\n1500 7\nBUY:\n2000 5\n");
}

#[test]
fn modify_appends_behind_existing_orders_at_new_price() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         BUY GFD 1000 10 id2\n\
         MODIFY id1 BUY 1000 10\n\
         SELL GFD 1000 10 id3\n",
    );
    assert_eq!(output, "TRADE id2 1000 10 id3 1000 10\n");
}

#[test]
fn modify_switches_side() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         MODIFY id1 SELL 1010 4\n\
         PRINT\n",
    );
    assert_eq!(output, "SELL:\n1010 4\nBUY:\n");
}

#[test]
fn modify_unknown_id_is_a_no_op() {
    let output = run_session(
        "MODIFY ghost BUY 1000 10\n\
         PRINT\n",
    );
    assert_eq!(output, "SELL:\nBUY:\n");
}

#[test]
fn duplicate_id_is_rejected_silently() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         BUY GFD 2000 99 id1\n\
         PRINT\n",
    );
    assert_eq!(output, "SELL:\nBUY:\n1000 10\n");
}

#[test]
fn non_positive_admissions_are_rejected_silently() {
    let output = run_session(
        "BUY GFD 0 10 id1\n\
         BUY GFD -5 10 id2\n\
         SELL GFD 1000 0 id3\n\
         SELL GFD 1000 -1 id4\n\
         PRINT\n",
    );
    assert_eq!(output, "SELL:\nBUY:\n");
}

#[test]
fn malformed_lines_are_skipped() {
    let output = run_session(
        "\n\
         BUY GFD 1000 10\n\
         BUY GFD abc 10 id1\n\
         NOPE GFD 1000 10 id1\n\
         BUY GFD 1000 10 id1\n\
         PRINT\n",
    );
    assert_eq!(output, "SELL:\nBUY:\n1000 10\n");
}

#[test]
fn snapshot_orders_levels_by_priority() {
    let output = run_session(
        "BUY GFD 990 1 b1\n\
         BUY GFD 1000 2 b2\n\
         BUY GFD 995 3 b3\n\
         SELL GFD 1010 4 s1\n\
         SELL GFD 1005 5 s2\n\
         SELL GFD 1020 6 s3\n\
         PRINT\n",
    );
    assert_eq!(
        output,
        "SELL:\n\
         1005 5\n\
         1010 4\n\
         1020 6\n\
         BUY:\n\
         1000 2\n\
         995 3\n\
         990 1\n"
    );
}

#[test]
fn aggregates_sum_orders_at_a_level() {
    let output = run_session(
        "BUY GFD 1000 3 b1\n\
         BUY GFD 1000 4 b2\n\
         PRINT\n",
    );
    assert_eq!(output, "SELL:\nBUY:\n1000 7\n");
}

#[test]
fn purge_clears_all_state() {
    use matching_engine::engine::Engine;
    use types::ids::OrderId;
    use types::numeric::{Price, Quantity};
    use types::order::{OrderType, Side};

    // Purge is an API-level reset, not a wire command
    let mut engine = MatchingEngine::new();
    engine
        .process_order(
            OrderType::GFD,
            Side::BUY,
            Price::new(1000),
            Quantity::new(10),
            OrderId::new("id1"),
        )
        .unwrap();
    engine
        .process_order(
            OrderType::GFD,
            Side::SELL,
            Price::new(1010),
            Quantity::new(10),
            OrderId::new("id2"),
        )
        .unwrap();

    engine.purge();

    assert!(engine.snapshot().is_empty());
    assert!(engine.cancel_order(&OrderId::new("id1")).is_err());
    assert!(engine
        .modify_order(
            &OrderId::new("id2"),
            Side::SELL,
            Price::new(1010),
            Quantity::new(10),
        )
        .is_err());

    // Ids are reusable after a purge
    let trades = engine
        .process_order(
            OrderType::GFD,
            Side::BUY,
            Price::new(1000),
            Quantity::new(10),
            OrderId::new("id1"),
        )
        .unwrap();
    assert!(trades.is_empty());
}

#[test]
fn partial_fill_keeps_reduced_front_order() {
    let output = run_session(
        "BUY GFD 1000 10 id1\n\
         SELL GFD 1000 4 id2\n\
         PRINT\n\
         SELL GFD 1000 6 id3\n\
         PRINT\n",
    );
    assert_eq!(
        output,
        "TRADE id1 1000 4 id2 1000 4\n\
         SELL:\n\
         BUY:\n\
         1000 6\n\
         TRADE id1 1000 6 id3 1000 6\n\
         SELL:\n\
         BUY:\n"
    );
}
