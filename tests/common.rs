#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter, prelude::*};
use tracing_appender::rolling;

use gesture_janken::assets::Assets;
use gesture_janken::vision::hand::{Hand, HandSide, Landmark, LANDMARK_COUNT};

static START: Once = Once::new();
static _GUARD: Lazy<std::sync::Mutex<Option<tracing_appender::non_blocking::WorkerGuard>>> = Lazy::new(|| std::sync::Mutex::new(None));

/// Initialize test environment: dotenv and tracing (stderr + file).
/// Idempotent: safe to call multiple times.
pub fn init() {
    START.call_once(|| {
        let _ = dotenvy::dotenv();
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .expect("env filter");

        // Daily rotating log file separate from app runtime logs
        let file_appender = rolling::daily("logs", "tests.log");
        let (file_nb, guard) = tracing_appender::non_blocking(file_appender);
        *_GUARD.lock().unwrap() = Some(guard); // retain guard for lifetime

        let stderr_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(std::io::stderr);

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(file_nb);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();

        tracing::info!(target="test_init", "Test tracing initialized (stderr + rotating file)");
    });
}

pub const COUNTDOWN: Duration = Duration::from_secs(3);

/// Assets shipped in the repository's resources/ directory.
pub fn repo_assets() -> Assets {
    Assets::load(concat!(env!("CARGO_MANIFEST_DIR"), "/resources")).expect("repo assets")
}

/// Build a right hand (as seen by the player) with the given fingers raised, thumb first.
pub fn hand_with(side: HandSide, up: [bool; 5]) -> Hand {
    let mut lms = vec![Landmark::new(320.0, 400.0); LANDMARK_COUNT];
    // thumb: IP at x=300, tip to the "up" side for this hand
    lms[3] = Landmark::new(300.0, 350.0);
    let outward = match side {
        HandSide::Right => 1.0,
        HandSide::Left => -1.0,
    };
    let thumb_dx = if up[0] { 25.0 * outward } else { -25.0 * outward };
    lms[4] = Landmark::new(300.0 + thumb_dx, 340.0);
    for finger in 1..5 {
        let tip = finger * 4 + 4;
        let x = 260.0 + finger as f64 * 20.0;
        lms[tip - 3] = Landmark::new(x, 320.0);
        lms[tip - 2] = Landmark::new(x, 290.0);
        let tip_y = if up[finger] { 220.0 } else { 310.0 };
        lms[tip - 1] = Landmark::new(x, (290.0 + tip_y) / 2.0);
        lms[tip] = Landmark::new(x, tip_y);
    }
    Hand::new(side, lms).expect("21 landmarks")
}

/// One JSON line in the tracker feed format.
pub fn feed_line(hands: &[Hand]) -> String {
    serde_json::json!({ "hands": hands }).to_string()
}

/// Same hand moved sideways by `dx` camera pixels.
pub fn shifted(hand: &Hand, dx: f64) -> Hand {
    let lms = hand
        .landmarks()
        .iter()
        .map(|lm| Landmark::new(lm.x + dx, lm.y))
        .collect();
    Hand::new(hand.side(), lms).expect("21 landmarks")
}

/// Write frames (one JSON line each) to a temporary recording file.
pub fn write_recording(frames: &[Vec<Hand>]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for frame in frames {
        writeln!(file, "{}", feed_line(frame)).expect("write frame");
    }
    file.flush().expect("flush");
    file
}
