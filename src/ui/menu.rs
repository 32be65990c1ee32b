use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::EndReason;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, theme);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    end_reason: Option<EndReason>,
    theme: &Theme,
) {
    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {high_score}")),
        Line::from(match end_reason {
            Some(EndReason::WallCollision) => "Cause: hit wall",
            Some(EndReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(if score >= high_score && score > 0 {
            "New high score!"
        } else {
            ""
        }),
        Line::from(""),
        Line::from("[R]/[Enter] Play Again"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " game over ", lines, theme);
}

/// Draws the board-full victory screen as a centered popup.
pub fn render_victory_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    theme: &Theme,
) {
    let lines = vec![
        Line::from("YOU WIN"),
        Line::from(""),
        Line::from("The board is full!"),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {high_score}")),
        Line::from(""),
        Line::from("[R]/[Enter] Play Again"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " victory ", lines, theme);
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>, theme: &Theme) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, 70, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered().title(title).title_style(
                Style::new()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;

    let [_, row, _] = Layout::vertical([
        Constraint::Length(top),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(row);

    center
}
