//! UI描画モジュール
//!
//! 背景・スコア・カウントダウン・AIの手・プレイヤービューを重ねて 1 画面にする。

use crate::app::App;
use crate::vision::hand::CONNECTIONS;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// メインUI描画関数
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let banner_lines = app.assets.background.lines().count();
    let banner_height = u16::try_from(banner_lines).unwrap_or(u16::MAX).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // 背景バナー
            Constraint::Length(3),             // スコア
            Constraint::Min(10),               // 対戦エリア
            Constraint::Length(3),             // ステータス
        ])
        .split(area);

    render_background(f, app, chunks[0]);
    render_scores(f, app, chunks[1]);

    let arena = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // AI
            Constraint::Percentage(20), // カウントダウン
            Constraint::Percentage(40), // プレイヤー
        ])
        .split(chunks[2]);

    render_ai(f, app, arena[0]);
    render_countdown(f, app, arena[1]);
    render_player_view(f, app, arena[2]);
    render_status(f, app, chunks[3]);
}

/// 背景バナーを描画
fn render_background(f: &mut Frame, app: &App, area: Rect) {
    let banner = Paragraph::new(app.assets.background.clone())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(banner, area);
}

fn render_scores(f: &mut Frame, app: &App, area: Rect) {
    let scores = app.session.scores();
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let ai = Paragraph::new(Line::from(vec![
        Span::raw("AI: "),
        Span::raw(scores.ai.to_string()).bold(),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    let player = Paragraph::new(Line::from(vec![
        Span::raw("Player: "),
        Span::raw(scores.player.to_string()).bold(),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(ai, halves[0]);
    f.render_widget(player, halves[1]);
}

/// AIの手（結果表示中のみ）
fn render_ai(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" AI ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let body = match app.session.shown_ai_move() {
        Some(mv) => Paragraph::new(format!("{}\n\n{}", app.assets.gesture(mv), mv))
            .style(Style::default().fg(Color::Yellow)),
        None => Paragraph::new(""),
    };
    f.render_widget(body.alignment(Alignment::Center).block(block), area);
}

/// カウントダウン（カウントダウン中のみ）
fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.session.countdown_value() {
        Some(n) => vec![
            Line::from(""),
            Line::from(""),
            Line::from(n.to_string()).red().bold(),
        ],
        None => Vec::new(),
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Timer "));
    f.render_widget(widget, area);
}

/// プレイヤービュー（検出されたランドマークを描く）
fn render_player_view(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.finger_count() {
        Some(n) => format!(" Player (fingers: {n}) "),
        None => " Player (no hand) ".to_string(),
    };
    let view = app.view;
    let height = view.height();

    // キャンバスの y 軸は上向きなので反転する
    let mut segments = Vec::new();
    let mut points = Vec::new();
    for hand in &app.hands {
        let projected: Vec<Option<(f64, f64)>> = hand
            .landmarks()
            .iter()
            .map(|lm| view.project(*lm).map(|(x, y)| (x, height - y)))
            .collect();
        for &(a, b) in CONNECTIONS.iter() {
            if let (Some(p), Some(q)) = (projected[a], projected[b]) {
                segments.push((p, q));
            }
        }
        points.extend(projected.into_iter().flatten());
    }

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, view.width()])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for &((x1, y1), (x2, y2)) in &segments {
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::Green));
            }
            ctx.draw(&Points {
                coords: &points,
                color: Color::Red,
            });
        });
    f.render_widget(canvas, area);
}

/// 直近の結果とキー操作のガイド
fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let result = match app.session.last_result() {
        Some(r) if app.session.is_result_shown() => r.describe(),
        _ if app.session.is_counting_down() => "Show your hand!".to_string(),
        _ => "Press [s] to start a round".to_string(),
    };
    let mut help = String::from("[s] start  [q] quit");
    if matches!(app.detector, crate::vision::Detector::Keyboard(_)) {
        help.push_str("  [0-5] fingers  [h] hand");
    }
    let status = Paragraph::new(Line::from(vec![
        Span::raw(result).bold(),
        Span::raw("   "),
        Span::raw(help),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(status, area);
}
