use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameSnapshot;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &GameSnapshot,
    theme: &Theme,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let accent = Style::new().fg(theme.hud_score);
    let muted = Style::new().fg(theme.hud_muted);

    let line = Line::from(vec![
        Span::styled("Score ", muted),
        Span::styled(snapshot.score.to_string(), accent),
        Span::styled("  Hi ", muted),
        Span::styled(snapshot.high_score.to_string(), accent),
        Span::styled("  Length ", muted),
        Span::styled(snapshot.snake.len().to_string(), accent),
        Span::styled("  Tick ", muted),
        Span::styled(format!("{}ms", snapshot.tick_interval_ms), accent),
        Span::styled("   [space] pause  [r] restart  [q] quit", muted),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}
