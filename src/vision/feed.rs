//! 外部トラッカーのランドマーク出力 (JSON Lines) を読む検出器
//!
//! トラッカーはカメラを自分で開き、1 フレームごとに 1 行の JSON を出力する:
//!
//! ```text
//! {"hands":[{"type":"Right","lm_list":[[x,y,z], ... 21点]}]}
//! ```
//!
//! 読み取りは別スレッドで行い、チャンネル経由で最新フレームを受け取る。
//! ゲームループ側は `detect()` で溜まったフレームのうち最後のものだけを使う。
//! 記録済みファイルの再生は `recording` モジュール。

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::detector::HandDetector;
use super::hand::Hand;

/// トラッカー 1 行分
#[derive(Debug, Deserialize)]
pub struct FeedFrame {
    #[serde(default)]
    pub hands: Vec<Hand>,
}

/// 読み取りスレッドからのメッセージ
enum FeedMessage {
    Frame(Vec<Hand>),
    Ended,
}

pub struct FeedDetector {
    rx: Receiver<FeedMessage>,
    latest: Vec<Hand>,
    flip: bool,
    ended: bool,
    child: Option<Child>,
}

impl FeedDetector {
    /// シェルコマンドとしてトラッカーを起動し、その標準出力を読む
    pub fn spawn(command: &str, flip: bool) -> Result<Self> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .wrap_err_with(|| format!("failed to spawn tracker: {command}"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| eyre!("tracker stdout not captured"))?;
        info!(target: "detector", command, pid = child.id(), "tracker started");
        let mut detector = Self::from_reader(BufReader::new(stdout), flip);
        detector.child = Some(child);
        Ok(detector)
    }

    /// 任意の `BufRead` から読む（テスト用にも使う）
    pub fn from_reader<R>(reader: R, flip: bool) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        start_feed_reader(reader, tx);
        Self {
            rx,
            latest: Vec::new(),
            flip,
            ended: false,
            child: None,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    fn accept(&mut self, mut hands: Vec<Hand>) {
        if self.flip {
            hands.iter_mut().for_each(Hand::flip_side);
        }
        self.latest = hands;
    }
}

/// 1 行をパースする。空行は None。
pub fn parse_line(line: &str) -> Result<Option<FeedFrame>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let frame = serde_json::from_str(trimmed).wrap_err("malformed landmark frame")?;
    Ok(Some(frame))
}

/// 読み取りスレッドを開始
fn start_feed_reader<R>(reader: R, tx: Sender<FeedMessage>)
where
    R: BufRead + Send + 'static,
{
    std::thread::spawn(move || {
        for (lineno, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!(target: "detector", error = %e, "landmark feed read error");
                    break;
                }
            };
            match parse_line(&line) {
                Ok(Some(frame)) => {
                    if tx.send(FeedMessage::Frame(frame.hands)).is_err() {
                        // 受信側 (FeedDetector) が破棄された
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(target: "detector", line = lineno + 1, error = %e, "skipping landmark frame");
                }
            }
        }
        let _ = tx.send(FeedMessage::Ended);
    });
}

impl HandDetector for FeedDetector {
    fn detect(&mut self) -> Result<Vec<Hand>> {
        loop {
            match self.rx.try_recv() {
                Ok(FeedMessage::Frame(hands)) => self.accept(hands),
                Ok(FeedMessage::Ended) | Err(TryRecvError::Disconnected) => {
                    if !self.ended {
                        self.ended = true;
                        self.latest.clear();
                        info!(target: "detector", "landmark feed ended");
                    }
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }
        debug!(target: "detector", hands = self.latest.len(), "feed frame");
        Ok(self.latest.clone())
    }

    fn name(&self) -> &'static str {
        "feed"
    }
}

impl Drop for FeedDetector {
    fn drop(&mut self) {
        if let Some(child) = self.child.as_mut() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
