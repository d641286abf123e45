//! イベント処理モジュール

use crate::app::App;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

/// キーイベントを処理
///
/// # Returns
/// - `Ok(true)` - アプリケーションを終了
/// - `Ok(false)` - 処理を継続
/// - `Err(_)` - エラーが発生
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Char('q') => {
            info!(target: "app", "quit requested");
            return Ok(true);
        }
        KeyCode::Char('s') => app.start_round(),
        KeyCode::Char('h') => {
            if let Some(hand) = app.detector.keyboard_mut() {
                hand.toggle_visible();
            }
        }
        KeyCode::Char(ch @ '0'..='5') => {
            // キーボード検出器のときだけ指の本数として扱う
            if let Some(hand) = app.detector.keyboard_mut() {
                hand.set_fingers(usize::from(ch as u8 - b'0'));
            }
        }
        _ => {}
    }
    Ok(false)
}
