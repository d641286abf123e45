use std::io::Cursor;
use std::time::Duration;

use color_eyre::Result;
use gesture_janken::vision::feed::parse_line;
use gesture_janken::vision::hand::HandSide;
use gesture_janken::vision::{FeedDetector, HandDetector};
mod common;

#[ctor::ctor]
fn _init() { common::init(); }

/// Poll until the reader thread has drained the whole feed.
fn drain(detector: &mut FeedDetector) -> Vec<gesture_janken::vision::Hand> {
    let mut last = Vec::new();
    for _ in 0..200 {
        last = detector.detect().unwrap();
        if detector.is_ended() {
            break;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    last
}

#[test]
fn parse_line_handles_blank_and_garbage() {
    assert!(parse_line("   ").unwrap().is_none());
    assert!(parse_line("not json").is_err());
    let empty = parse_line(r#"{"hands":[]}"#).unwrap().unwrap();
    assert!(empty.hands.is_empty());
    let missing = parse_line("{}").unwrap().unwrap();
    assert!(missing.hands.is_empty());
}

/// Tracker stand-in: print the given lines, then keep stdout open.
fn tracker_command(lines: &[String]) -> String {
    let mut cmd = String::from("printf '%s\\n'");
    for line in lines {
        cmd.push_str(&format!(" '{line}'"));
    }
    cmd.push_str("; sleep 5");
    cmd
}

#[test]
fn ended_feed_reports_no_hands() {
    let fist = common::hand_with(HandSide::Right, [false; 5]);
    let feed = format!("{}\n", common::feed_line(&[fist]));
    let mut detector = FeedDetector::from_reader(Cursor::new(feed), false);

    assert!(drain(&mut detector).is_empty());
    assert!(detector.is_ended());
    assert!(detector.detect().unwrap().is_empty());
}

#[test]
fn latest_frame_wins_and_garbage_is_skipped() -> Result<()> {
    let fist = common::hand_with(HandSide::Right, [false; 5]);
    let scissors = common::hand_with(HandSide::Right, [false, true, true, false, false]);
    let cmd = tracker_command(&[
        common::feed_line(&[fist]),
        "garbage line".to_string(),
        common::feed_line(&[scissors]),
    ]);
    let mut detector = FeedDetector::spawn(&cmd, false)?;

    let mut count = None;
    for _ in 0..500 {
        let hands = detector.detect()?;
        count = hands.first().map(|h| h.finger_count());
        if count == Some(2) {
            break;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    assert_eq!(count, Some(2));
    assert!(!detector.is_ended());

    // no new frame: keep reporting the latest one
    assert_eq!(detector.detect()?.len(), 1);
    Ok(())
}

#[test]
fn keeps_every_hand_and_flips_labels() -> Result<()> {
    let a = common::hand_with(HandSide::Right, [false; 5]);
    let b = common::hand_with(HandSide::Left, [true; 5]);
    let cmd = tracker_command(&[common::feed_line(&[a, b])]);
    let mut detector = FeedDetector::spawn(&cmd, true)?;

    let mut hands = Vec::new();
    for _ in 0..500 {
        hands = detector.detect()?;
        if !hands.is_empty() {
            break;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    // limiting to max_hands happens after the view filter, in App
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].side(), HandSide::Left);
    assert_eq!(hands[1].side(), HandSide::Right);
    Ok(())
}
