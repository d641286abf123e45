//! ハンドトラッキング連携（ランドマークの受け取りと指の判定）

pub mod hand;
pub mod view;
pub mod detector;
pub mod feed;
pub mod recording;
pub mod simulated;

pub use detector::{Detector, HandDetector};
pub use feed::FeedDetector;
pub use hand::{Hand, HandSide, Landmark};
pub use recording::Recording;
pub use simulated::KeyboardHand;
pub use view::PlayerView;
