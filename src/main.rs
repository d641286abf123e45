use color_eyre::Result;
use gesture_janken::assets::Assets;
use gesture_janken::{App, Config};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    color_eyre::install()?;

    // Load .env (optional). JANKEN_* settings may live in a local .env file.
    // If the file doesn't exist, ignore the error.
    let _ = dotenvy::dotenv();

    // ログ: 標準出力は使わず、ファイルへのみ出力してratatuiと衝突しないようにする
    let file_appender = rolling::daily("logs", "app.log");
    // _guardはdropするとログが失われるため、main終了まで保持
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // ファイルにANSIカラー不要
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // ターミナルを初期化する前に設定・アセット・検出器を用意する（エラーを普通に表示するため）
    let config = Config::from_env()?;
    let assets = Assets::load(&config.assets_dir)?;
    let detector = gesture_janken::build_detector(&config)?;
    let app = App::new(config, detector, assets);

    let terminal = ratatui::init();
    let res = gesture_janken::run(terminal, app);
    ratatui::restore();
    res
}
