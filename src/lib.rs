// 同階層のファイルをモジュールとしてインポート
pub mod app;
pub mod assets;
pub mod config;
pub mod event;
pub mod game; // じゃんけんのルールとラウンド進行
pub mod ui;
pub mod vision; // ハンドトラッカー連携

pub use app::App;
pub use config::Config;

use color_eyre::Result;
use crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use config::DetectorSource;
use vision::{Detector, FeedDetector, KeyboardHand, Recording};

// Ensure .env is loaded for tests before anything else runs in the test process.
#[cfg(test)]
#[ctor::ctor]
fn load_dotenv_for_tests() {
    let _ = dotenvy::dotenv();
}

/// 設定に従って検出器を作る
pub fn build_detector(config: &Config) -> Result<Detector> {
    let detector = match &config.detector {
        DetectorSource::Keyboard => Detector::Keyboard(KeyboardHand::new()),
        DetectorSource::Command(cmd) => {
            Detector::Feed(FeedDetector::spawn(cmd, config.flip)?)
        }
        DetectorSource::File(path) => {
            Detector::Recording(Recording::open(path, config.flip)?)
        }
    };
    Ok(detector)
}

/// アプリケーションのメインループを実行
pub fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let poll_interval = app.config.poll_interval();

    loop {
        // 検出器を読んでラウンドを進める
        app.update();

        // 画面を描画
        terminal.draw(|f| ui::render(f, &app))?;

        // poll_interval 以内にイベントが来たら処理
        if crossterm_event::poll(poll_interval)? {
            match crossterm_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event::handle_key(&mut app, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // 次ループで再描画されるので特別な処理なし
                }
                _ => {}
            }
        }
    }

    let scores = app.session.scores();
    tracing::info!(
        target: "app",
        ai = scores.ai,
        player = scores.player,
        elapsed_secs = app.elapsed_time().as_secs(),
        "game finished"
    );
    Ok(())
}
