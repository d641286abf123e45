use std::collections::HashMap;
use std::path::PathBuf;

use gesture_janken::config::{Config, DetectorSource, DEFAULT_ASSETS_DIR, DEFAULT_COUNTDOWN_SECS};
mod common;

#[ctor::ctor]
fn _init() { common::init(); }

fn from_pairs(pairs: &[(&str, &str)]) -> color_eyre::Result<Config> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn config_defaults() {
    let c = Config::new();
    assert_eq!(c.assets_dir, PathBuf::from("resources"));
    assert_eq!(c.countdown_secs, 3);
    assert_eq!(c.poll_interval_ms, 30);
    assert_eq!(c.detector, DetectorSource::Keyboard);
    assert!(!c.flip);
    assert_eq!(c.max_hands, 1);
    assert_eq!(c.seed, None);
}

#[test]
fn constants_values() {
    assert_eq!(DEFAULT_COUNTDOWN_SECS, 3);
    assert_eq!(DEFAULT_ASSETS_DIR, "resources");
}

#[test]
fn empty_lookup_gives_defaults() {
    let c = from_pairs(&[]).unwrap();
    assert_eq!(c.countdown_secs, 3);
    assert_eq!(c.detector, DetectorSource::Keyboard);
}

#[test]
fn overrides_are_parsed() {
    let c = from_pairs(&[
        ("JANKEN_ASSETS_DIR", "/tmp/art"),
        ("JANKEN_COUNTDOWN_SECS", "5"),
        ("JANKEN_POLL_INTERVAL_MS", " 16 "),
        ("JANKEN_FLIP", "true"),
        ("JANKEN_MAX_HANDS", "2"),
        ("JANKEN_SEED", "1234"),
        ("JANKEN_DETECTOR", "feed"),
        ("JANKEN_FEED_COMMAND", "python tracker.py"),
    ])
    .unwrap();
    assert_eq!(c.assets_dir, PathBuf::from("/tmp/art"));
    assert_eq!(c.countdown().as_secs(), 5);
    assert_eq!(c.poll_interval().as_millis(), 16);
    assert!(c.flip);
    assert_eq!(c.max_hands, 2);
    assert_eq!(c.seed, Some(1234));
    assert_eq!(c.detector, DetectorSource::Command("python tracker.py".into()));
}

#[test]
fn feed_file_source() {
    let c = from_pairs(&[("JANKEN_DETECTOR", "feed"), ("JANKEN_FEED_FILE", "hands.jsonl")]).unwrap();
    assert_eq!(c.detector, DetectorSource::File(PathBuf::from("hands.jsonl")));
}

#[test]
fn invalid_values_are_errors() {
    assert!(from_pairs(&[("JANKEN_COUNTDOWN_SECS", "three")]).is_err());
    assert!(from_pairs(&[("JANKEN_FLIP", "maybe")]).is_err());
    assert!(from_pairs(&[("JANKEN_MAX_HANDS", "0")]).is_err());
    assert!(from_pairs(&[("JANKEN_DETECTOR", "webcam")]).is_err());
    // feed without a source
    assert!(from_pairs(&[("JANKEN_DETECTOR", "feed")]).is_err());
}
